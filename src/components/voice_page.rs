use leptos::prelude::*;
use web_sys::{CanvasRenderingContext2d, File, HtmlAudioElement};

use crate::api;
use crate::charts::{self, bar, line};
use crate::components::player::AudioPlayer;
use crate::components::results::{
    scroll_to_top, ActionRow, ChartCard, ErrorNotice, ProgressSection, SummaryCard, TipsSection,
};
use crate::components::upload_card::UploadCard;
use crate::session;
use crate::state::AppState;
use crate::types::{fmt_num, VoiceReport};

const PROGRESS_TICK_MS: u32 = 120;

pub const BOTH_FILES_REQUIRED: &str = "🎤 음성 파일과 📝 대본 파일을 모두 업로드해주세요.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum VoiceMode {
    #[default]
    Simple,
    WithScript,
}

/// Script-comparison analysis needs both uploads before a request goes out.
fn dual_upload_notice(has_audio: bool, has_script: bool) -> Option<&'static str> {
    (!(has_audio && has_script)).then_some(BOTH_FILES_REQUIRED)
}

#[component]
pub fn VoicePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = state.voice;
    let mode = RwSignal::new(VoiceMode::Simple);
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    // Deferred handles for the script-comparison flow; submission happens
    // on the analyze button, not on selection.
    let audio_file = RwSignal::new_local(None::<File>);
    let script_file = RwSignal::new_local(None::<File>);

    let on_simple_file = move |file: File| {
        session.select();
        session.set_preview(&file);
        session::submit(session, PROGRESS_TICK_MS, api::analyze_audio(file));
    };

    let on_audio_file = move |file: File| {
        session.select();
        session.set_preview(&file);
        audio_file.set(Some(file));
    };

    let on_script_file = move |file: File| {
        session.select();
        script_file.set(Some(file));
    };

    let on_analyze = move |_: web_sys::MouseEvent| {
        let audio = audio_file.get_untracked();
        let script = script_file.get_untracked();
        if let Some(notice) = dual_upload_notice(audio.is_some(), script.is_some()) {
            session.error.set(Some(notice.to_string()));
            return;
        }
        let (Some(audio), Some(script)) = (audio, script) else {
            return;
        };
        session::submit(session, PROGRESS_TICK_MS, api::analyze_speech(audio, script));
    };

    let on_replay = move || {
        scroll_to_top();
        if let Some(audio) = audio_ref.get() {
            let el: &HtmlAudioElement = audio.as_ref();
            let _ = el.play();
        }
    };

    view! {
        <div class="page">
            <div class="mode-tabs">
                <button
                    class=move || {
                        if mode.get() == VoiceMode::Simple { "mode-tab active" } else { "mode-tab" }
                    }
                    on:click=move |_| mode.set(VoiceMode::Simple)
                >
                    "음성만 분석"
                </button>
                <button
                    class=move || {
                        if mode.get() == VoiceMode::WithScript { "mode-tab active" } else { "mode-tab" }
                    }
                    on:click=move |_| mode.set(VoiceMode::WithScript)
                >
                    "대본 비교 분석"
                </button>
            </div>

            {move || match mode.get() {
                VoiceMode::Simple => {
                    view! {
                        <UploadCard
                            icon="🎤"
                            title="음성 파일 업로드"
                            hint=".mp3, .wav, .ogg 지원"
                            accept=".mp3,.wav,.ogg"
                            on_file=on_simple_file
                        />
                    }
                        .into_any()
                }
                VoiceMode::WithScript => {
                    view! {
                        <div class="dual-upload">
                            <UploadCard
                                icon="🎤"
                                title="음성 파일 업로드"
                                hint=".mp3, .wav, .ogg 지원"
                                accept=".mp3,.wav,.ogg"
                                on_file=on_audio_file
                            />
                            <UploadCard
                                icon="📝"
                                title="대본 파일 업로드"
                                hint=".txt 지원"
                                accept=".txt"
                                on_file=on_script_file
                            />
                        </div>
                        <div class="dual-names">
                            {move || {
                                audio_file
                                    .with(|f| f.as_ref().map(|f| f.name()))
                                    .map(|name| view! { <span class="picked-name">{name}</span> })
                            }}
                            {move || {
                                script_file
                                    .with(|f| f.as_ref().map(|f| f.name()))
                                    .map(|name| view! { <span class="picked-name">{name}</span> })
                            }}
                        </div>
                        <div class="analyze-row">
                            <button class="accent-button" on:click=on_analyze>
                                "분석 시작"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}

            {move || {
                session
                    .in_progress()
                    .then(|| view! { <ProgressSection progress=session.progress caption="음성 분석 중…" /> })
            }}

            <ErrorNotice message=session.error />

            {move || {
                session
                    .preview()
                    .map(|src| view! { <AudioPlayer src=src node_ref=audio_ref /> })
            }}

            {move || {
                session
                    .ready()
                    .then(|| {
                        let report = session.result.get().unwrap_or_default();
                        let stats = report.stats.clone();
                        let tips = report.tips.clone();

                        view! {
                            <div class="summary-grid six">
                                <SummaryCard icon="⏱" value=stats.speed_label() label="말하기 속도" />
                                <SummaryCard icon="✅" value=stats.accuracy_label() label="발음 정확도" />
                                <SummaryCard icon="🚫" value=stats.filler_label() label="불필요 단어" />
                                <SummaryCard icon="⏸" value=stats.pause_label() label="어간 공백" />
                                <SummaryCard icon="📈" value="Moderate" label="억양 변화" />
                                <SummaryCard icon="🔊" value="85%" label="음량 균일성" />
                            </div>

                            <section class="chart-grid two">{voice_charts(&report)}</section>

                            {(!tips.is_empty()).then(|| view! { <TipsSection tips=tips /> })}

                            <ActionRow action_label="음성 재생" on_action=on_replay />
                        }
                    })
            }}
        </div>
    }
}

fn voice_charts(report: &VoiceReport) -> impl IntoView {
    let speed_labels: Vec<String> = report.speed_data.iter().map(|p| p.time.display()).collect();
    let speed_values: Vec<f64> = report.speed_data.iter().map(|p| p.speed).collect();
    let draw_speed = move |ctx: &CanvasRenderingContext2d, w: f64, h: f64| {
        line::draw_line_chart(
            ctx,
            w,
            h,
            &speed_labels,
            &line::Series { points: &speed_values, color: charts::BLUE },
            None,
        );
    };

    // Some backend versions omit `x`; fall back to the sample index.
    let has_x = report.pitch_and_volume_data.iter().any(|p| p.x != 0.0);
    let pv_labels: Vec<String> = report
        .pitch_and_volume_data
        .iter()
        .enumerate()
        .map(|(i, p)| if has_x { fmt_num(p.x) } else { i.to_string() })
        .collect();
    let pitch_values: Vec<f64> = report.pitch_and_volume_data.iter().map(|p| p.pitch).collect();
    let volume_values: Vec<f64> = report.pitch_and_volume_data.iter().map(|p| p.volume).collect();
    let draw_pitch_volume = move |ctx: &CanvasRenderingContext2d, w: f64, h: f64| {
        line::draw_line_chart(
            ctx,
            w,
            h,
            &pv_labels,
            &line::Series { points: &pitch_values, color: charts::PURPLE },
            Some(&line::Series { points: &volume_values, color: charts::GREEN }),
        );
    };

    let filler_labels: Vec<String> = report.filler_data.iter().map(|p| p.word.clone()).collect();
    let filler_values: Vec<f64> = report.filler_data.iter().map(|p| f64::from(p.count)).collect();
    let draw_filler = move |ctx: &CanvasRenderingContext2d, w: f64, h: f64| {
        bar::draw_bar_chart(ctx, w, h, &filler_labels, &filler_values, charts::BLUE);
    };

    let pause_labels: Vec<String> = report.pause_data.iter().map(|p| p.length.display()).collect();
    let pause_values: Vec<f64> = report.pause_data.iter().map(|p| p.freq).collect();
    let draw_pause = move |ctx: &CanvasRenderingContext2d, w: f64, h: f64| {
        bar::draw_bar_chart(ctx, w, h, &pause_labels, &pause_values, charts::BLUE);
    };

    view! {
        <ChartCard title="속도 변화" draw=draw_speed />
        <ChartCard title="억양·음량" draw=draw_pitch_volume />
        <ChartCard title="불필요 단어" draw=draw_filler />
        <ChartCard title="어간 공백 길이" draw=draw_pause />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_upload_requires_both_files() {
        assert_eq!(dual_upload_notice(true, false), Some(BOTH_FILES_REQUIRED));
        assert_eq!(dual_upload_notice(false, true), Some(BOTH_FILES_REQUIRED));
        assert_eq!(dual_upload_notice(false, false), Some(BOTH_FILES_REQUIRED));
        assert_eq!(dual_upload_notice(true, true), None);
    }

    #[test]
    fn dual_upload_notice_names_both_inputs() {
        let notice = dual_upload_notice(true, false).unwrap();
        assert_eq!(notice, "🎤 음성 파일과 📝 대본 파일을 모두 업로드해주세요.");
    }
}
