use leptos::prelude::*;

use crate::state::{AppState, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <main class="hero">
            <h1 class="hero-title">
                <span>"자신감 있는 발표의 시작,"</span>
                <span>
                    <span class="hero-brand">"PitchPal"</span>
                    "과 함께하세요"
                </span>
            </h1>
            <p class="hero-copy">
                "언제 어디서든 AI가 발표를 분석하고 피드백을 제공합니다. 지금 바로 연습을 시작해보세요."
            </p>
            <div class="entry-cards">
                {Page::ANALYSIS
                    .iter()
                    .map(|&page| {
                        view! {
                            <button class="entry-card" on:click=move |_| state.page.set(page)>
                                <span class="entry-icon">{page.icon()}</span>
                                <span class="entry-label">{page.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </main>
    }
}
