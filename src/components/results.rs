use leptos::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::charts;

#[component]
pub fn ProgressSection(#[prop(into)] progress: Signal<u32>, caption: &'static str) -> impl IntoView {
    view! {
        <div class="progress-section">
            <progress
                class="custom-progress"
                max="100"
                value=move || progress.get().to_string()
            ></progress>
            <p class="progress-caption">{move || format!("{caption} {}%", progress.get())}</p>
        </div>
    }
}

#[component]
pub fn ErrorNotice(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            message
                .get()
                .map(|text| {
                    view! {
                        <div class="error-notice">
                            <p>{text}</p>
                        </div>
                    }
                })
        }}
    }
}

#[component]
pub fn SummaryCard(
    icon: &'static str,
    #[prop(into)] value: String,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="summary-card">
            <div class="summary-icon">{icon}</div>
            <p class="summary-value">{value}</p>
            <p class="summary-label">{label}</p>
        </div>
    }
}

/// Titled card wrapping a canvas; `draw` runs once the canvas is mounted
/// and sized. The chart data is captured by the closure, so the card
/// re-renders only when its parent section does.
#[component]
pub fn ChartCard<F>(title: &'static str, draw: F) -> impl IntoView
where
    F: Fn(&CanvasRenderingContext2d, f64, f64) + 'static,
{
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let Some(canvas_el) = canvas_ref.get() else { return };
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();

        let rect = canvas.get_bounding_client_rect();
        let display_w = rect.width() as u32;
        let display_h = rect.height() as u32;
        if display_w == 0 || display_h == 0 {
            return;
        }
        if canvas.width() != display_w || canvas.height() != display_h {
            canvas.set_width(display_w);
            canvas.set_height(display_h);
        }

        let Some(ctx) = charts::context_2d(canvas) else { return };
        draw(&ctx, display_w as f64, display_h as f64);
    });

    view! {
        <div class="chart-card">
            <h4 class="chart-title">{title}</h4>
            <canvas class="chart-canvas" node_ref=canvas_ref></canvas>
        </div>
    }
}

#[component]
pub fn TipsSection(tips: Vec<String>) -> impl IntoView {
    view! {
        <section class="tips-section">
            <h3 class="tips-title">"개선 제안"</h3>
            <ul class="tips-list">
                {tips.into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}
            </ul>
        </section>
    }
}

/// Accent action (replay, apply-all) plus the re-analyze button, which
/// hard-resets by reloading the page.
#[component]
pub fn ActionRow<A>(action_label: &'static str, on_action: A) -> impl IntoView
where
    A: Fn() + 'static,
{
    view! {
        <div class="action-row">
            <button class="accent-button" on:click=move |_| on_action()>
                {action_label}
            </button>
            <button class="plain-button" on:click=move |_| reload_page()>
                "다시 분석하기"
            </button>
        </div>
    }
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}
