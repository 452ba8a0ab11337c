use leptos::prelude::*;

use crate::api;
use crate::components::results::{ActionRow, ErrorNotice, ProgressSection, SummaryCard};
use crate::components::upload_card::UploadCard;
use crate::session;
use crate::state::AppState;
use crate::types::SpellingError;

const PROGRESS_TICK_MS: u32 = 120;

/// First error whose flagged substring appears in the word, if any.
fn find_error<'a>(word: &str, errors: &'a [SpellingError]) -> Option<&'a SpellingError> {
    errors
        .iter()
        .find(|err| !err.original.is_empty() && word.contains(err.original.as_str()))
}

#[component]
pub fn ContentPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = state.content;

    let on_file = move |file: web_sys::File| {
        session.select();
        session::submit(session, PROGRESS_TICK_MS, api::analyze_content(file));
    };

    view! {
        <div class="page">
            <UploadCard
                icon="☁️"
                title="파일 업로드"
                hint=".docx, .txt, .pdf 지원"
                accept=".docx,.txt,.pdf"
                on_file=on_file
            />

            {move || {
                session
                    .in_progress()
                    .then(|| view! { <ProgressSection progress=session.progress caption="맞춤법 검사 중…" /> })
            }}

            <ErrorNotice message=session.error />

            {move || {
                session
                    .ready()
                    .then(|| {
                        let report = session.result.get().unwrap_or_default();
                        let stats = report.stats.clone();
                        let marked = mark_errors(&report.original_text, &report.errors);
                        let rows = report
                            .errors
                            .iter()
                            .map(|err| {
                                view! {
                                    <tr>
                                        <td>{err.original.clone()}</td>
                                        <td>{err.suggestion.clone()}</td>
                                        <td>{err.kind.clone()}</td>
                                    </tr>
                                }
                            })
                            .collect_view();

                        view! {
                            <div class="summary-grid three">
                                <SummaryCard icon="📄" value=stats.word_count.to_string() label="총 단어 수" />
                                <SummaryCard icon="#️⃣" value=stats.error_count.to_string() label="오류 건수" />
                                <SummaryCard icon="☑️" value=stats.avg_label() label="평균 오류" />
                            </div>

                            <div class="text-compare">
                                <div class="original-text">
                                    <pre>{marked}</pre>
                                </div>
                                <div class="error-table-wrap">
                                    <table class="error-table">
                                        <thead>
                                            <tr>
                                                <th>"오류 문장"</th>
                                                <th>"제안 수정안"</th>
                                                <th>"유형"</th>
                                            </tr>
                                        </thead>
                                        <tbody>{rows}</tbody>
                                    </table>
                                </div>
                            </div>

                            <ActionRow
                                action_label="모두 수정 적용"
                                on_action=move || log::info!("모두 수정 적용 요청")
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Words containing a flagged substring are underlined, with the
/// suggestion shown on hover.
fn mark_errors(text: &str, errors: &[SpellingError]) -> Vec<AnyView> {
    text.split(' ')
        .map(|word| {
            let spaced = format!("{word} ");
            match find_error(word, errors) {
                Some(err) => view! {
                    <span
                        class="misspelled"
                        title=format!("{} → {}", err.original, err.suggestion)
                    >
                        {spaced}
                    </span>
                }
                .into_any(),
                None => view! { <span>{spaced}</span> }.into_any(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(original: &str, suggestion: &str) -> SpellingError {
        SpellingError {
            original: original.into(),
            suggestion: suggestion.into(),
            kind: "맞춤법".into(),
        }
    }

    #[test]
    fn find_error_matches_flagged_substring() {
        let errors = vec![error("됬다", "됐다"), error("웬지", "왠지")];
        assert_eq!(find_error("됬다.", &errors).map(|e| e.suggestion.as_str()), Some("됐다"));
        assert_eq!(find_error("웬지", &errors).map(|e| e.suggestion.as_str()), Some("왠지"));
        assert!(find_error("발표가", &errors).is_none());
    }

    #[test]
    fn find_error_ignores_empty_patterns() {
        let errors = vec![error("", "whatever")];
        assert!(find_error("아무거나", &errors).is_none());
    }
}
