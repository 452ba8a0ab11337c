use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::types::{ContentReport, VideoReport, VoiceReport};

/// The analysis backend runs alongside the dev server on a fixed port.
pub const API_BASE: &str = "http://localhost:8000";

const FAILURE_PREFIX: &str = "분석 실패: ";

/// User-facing failure string: fixed prefix plus the server's `detail`
/// field when one was present, the transport error otherwise.
pub fn failure_message(detail: &str) -> String {
    format!("{FAILURE_PREFIX}{detail}")
}

/// FastAPI-style error bodies optionally carry a `detail` string.
pub fn extract_detail(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body).ok()?.detail
}

pub async fn analyze_content(file: File) -> Result<ContentReport, String> {
    let form = form_with(&[("file", &file)])?;
    post_multipart("/analyze-content", form).await
}

pub async fn analyze_audio(file: File) -> Result<VoiceReport, String> {
    let form = form_with(&[("file", &file)])?;
    post_multipart("/analyze-audio", form).await
}

pub async fn analyze_speech(audio: File, script: File) -> Result<VoiceReport, String> {
    let form = form_with(&[("audio_file", &audio), ("script_file", &script)])?;
    post_multipart("/analyze-speech", form).await
}

pub async fn analyze_video(file: File) -> Result<VideoReport, String> {
    let form = form_with(&[("file", &file)])?;
    post_multipart("/analyze-video", form).await
}

fn form_with(parts: &[(&str, &File)]) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| failure_message(&js_text(&e)))?;
    for (field, file) in parts {
        form.append_with_blob(field, file)
            .map_err(|e| failure_message(&js_text(&e)))?;
    }
    Ok(form)
}

async fn post_multipart<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, String> {
    let url = format!("{API_BASE}{path}");
    let response = Request::post(&url)
        .body(form)
        .map_err(|e| failure_message(&e.to_string()))?
        .send()
        .await
        .map_err(|e| failure_message(&e.to_string()))?;

    if !response.ok() {
        let detail = response.text().await.ok().and_then(|body| extract_detail(&body));
        let fallback = format!("HTTP {}", response.status());
        return Err(failure_message(detail.as_deref().unwrap_or(&fallback)));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| failure_message(&e.to_string()))
}

fn js_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_carries_server_detail() {
        assert_eq!(failure_message("invalid format"), "분석 실패: invalid format");
    }

    #[test]
    fn extract_detail_reads_fastapi_error_body() {
        assert_eq!(
            extract_detail(r#"{"detail": "invalid format"}"#),
            Some("invalid format".to_string())
        );
    }

    #[test]
    fn extract_detail_ignores_other_bodies() {
        assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert_eq!(extract_detail(""), None);
    }
}
