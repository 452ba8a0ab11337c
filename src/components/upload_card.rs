use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// File intake card: a hidden input behind a styled button. An empty
/// selection is a no-op; the input value is cleared after each pick so the
/// same file can be re-selected.
#[component]
pub fn UploadCard<F>(
    icon: &'static str,
    title: &'static str,
    hint: &'static str,
    accept: &'static str,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static,
{
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_pick = move |_: web_sys::MouseEvent| {
        if let Some(input) = input_ref.get() {
            let el: &HtmlInputElement = input.as_ref();
            el.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let input: HtmlInputElement = target.unchecked_into();
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        on_file(file);
        input.set_value("");
    };

    view! {
        <div class="upload-card">
            <div class="upload-icon">{icon}</div>
            <h3 class="upload-title">{title}</h3>
            <p class="upload-hint">{hint}</p>
            <input
                type="file"
                class="hidden-input"
                accept=accept
                node_ref=input_ref
                on:change=on_change
            />
            <button class="pick-button" on:click=on_pick>
                "파일 선택"
            </button>
        </div>
    }
}
