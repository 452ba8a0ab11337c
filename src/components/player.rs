use leptos::prelude::*;
use web_sys::HtmlAudioElement;

/// Hidden audio element with play/pause, a seek slider, and elapsed time.
/// The parent owns `node_ref` so its replay button can drive playback.
#[component]
pub fn AudioPlayer(
    #[prop(into)] src: String,
    node_ref: NodeRef<leptos::html::Audio>,
) -> impl IntoView {
    let current = RwSignal::new(0.0f64);
    let duration = RwSignal::new(0.0f64);
    let playing = RwSignal::new(false);

    let on_loaded = move |_| {
        if let Some(audio) = node_ref.get() {
            let el: &HtmlAudioElement = audio.as_ref();
            let total = el.duration();
            if total.is_finite() {
                duration.set(total);
            }
        }
    };

    let on_time = move |_| {
        if let Some(audio) = node_ref.get() {
            let el: &HtmlAudioElement = audio.as_ref();
            current.set(el.current_time());
        }
    };

    let on_toggle = move |_| {
        let Some(audio) = node_ref.get() else { return };
        let el: &HtmlAudioElement = audio.as_ref();
        if el.paused() {
            let _ = el.play();
        } else {
            let _ = el.pause();
        }
    };

    let on_seek = move |ev: web_sys::Event| {
        let Ok(time) = event_target_value(&ev).parse::<f64>() else {
            return;
        };
        if let Some(audio) = node_ref.get() {
            let el: &HtmlAudioElement = audio.as_ref();
            el.set_current_time(time);
            current.set(time);
        }
    };

    view! {
        <audio
            node_ref=node_ref
            src=src
            class="hidden-audio"
            on:loadedmetadata=on_loaded
            on:timeupdate=on_time
            on:play=move |_| playing.set(true)
            on:pause=move |_| playing.set(false)
        ></audio>
        <div class="player-row">
            <button class="player-toggle" on:click=on_toggle>
                {move || if playing.get() { "❚❚" } else { "▶︎" }}
            </button>
            <input
                type="range"
                class="player-seek"
                min="0"
                max=move || format!("{}", duration.get())
                prop:value=move || current.get()
                on:input=on_seek
            />
            <span class="player-time">
                {move || format!("{} / {} sec", current.get() as u64, duration.get() as u64)}
            </span>
        </div>
    }
}
