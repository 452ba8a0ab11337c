use leptos::prelude::*;

use crate::components::content_page::ContentPage;
use crate::components::home::HomePage;
use crate::components::video_page::VideoPage;
use crate::components::voice_page::VoicePage;
use crate::state::{AppState, Page};

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    view! {
        <div class="app">
            <Header />
            {move || match state.page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Content => view! { <ContentPage /> }.into_any(),
                Page::Voice => view! { <VoicePage /> }.into_any(),
                Page::Video => view! { <VideoPage /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <header class="header">
            <button class="logo" on:click=move |_| state.page.set(Page::Home)>
                "PitchPal"
            </button>
            <nav class="nav">
                {Page::ALL
                    .iter()
                    .map(|&page| {
                        view! {
                            <button
                                class=move || {
                                    if state.page.get() == page { "nav-link active" } else { "nav-link" }
                                }
                                on:click=move |_| state.page.set(page)
                            >
                                {page.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
