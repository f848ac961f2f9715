//! Bridge between the player state and the widget's `<audio>` element.
//! Non-wasm builds get inert stand-ins so the UI and its logic still compile.

use crate::error::NavError;
use crate::playlist::Track;
use tracing::debug;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

pub const AUDIO_ELEMENT_ID: &str = "gallery-nav-audio";

#[cfg(target_arch = "wasm32")]
pub type AudioHandle = HtmlAudioElement;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct AudioHandle;

#[cfg(target_arch = "wasm32")]
pub fn audio_element() -> Option<AudioHandle> {
    let document = window()?.document()?;
    document
        .get_element_by_id(AUDIO_ELEMENT_ID)?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn audio_element() -> Option<AudioHandle> {
    None
}

/// Points the element at `track`, reloading only when the source changed.
#[cfg(target_arch = "wasm32")]
pub fn ensure_source(audio: &AudioHandle, track: &Track) -> bool {
    if audio.src() == track.src {
        return false;
    }
    debug!(title = track.title, "loading track");
    audio.set_src(track.src);
    audio.load();
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_source(_audio: &AudioHandle, track: &Track) -> bool {
    debug!(title = track.title, "no media element, skipping load");
    false
}

#[cfg(target_arch = "wasm32")]
pub async fn request_play(audio: &AudioHandle) -> Result<(), NavError> {
    let promise = audio
        .play()
        .map_err(|err| NavError::PlayRejected(describe_js_error(&err)))?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| NavError::PlayRejected(describe_js_error(&err)))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn request_play(_audio: &AudioHandle) -> Result<(), NavError> {
    Err(NavError::MediaUnavailable)
}

/// Loads `track` if needed, then asks the browser to play it.
pub async fn play_track(track: Track) -> Result<(), NavError> {
    let audio = audio_element().ok_or(NavError::MediaUnavailable)?;
    ensure_source(&audio, &track);
    request_play(&audio).await
}

#[cfg(target_arch = "wasm32")]
pub fn pause(audio: &AudioHandle) {
    if let Err(err) = audio.pause() {
        debug!("pause request failed: {}", describe_js_error(&err));
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn pause(_audio: &AudioHandle) {}

#[cfg(target_arch = "wasm32")]
pub fn set_muted(audio: &AudioHandle, muted: bool) {
    if audio.muted() != muted {
        audio.set_muted(muted);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_muted(_audio: &AudioHandle, _muted: bool) {}

// Rejections are usually DOMExceptions (NotAllowedError for autoplay policy).
#[cfg(target_arch = "wasm32")]
fn describe_js_error(value: &JsValue) -> String {
    let field = |key: &str| {
        js_sys::Reflect::get(value, &key.into())
            .ok()
            .and_then(|v| v.as_string())
            .filter(|v| !v.trim().is_empty())
    };
    match (field("name"), field("message")) {
        (Some(name), Some(message)) => format!("{name}: {message}"),
        (Some(text), None) | (None, Some(text)) => text,
        (None, None) => value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}

/// Runs `f` after the current render pass, so effects never write a signal
/// they are still holding.
#[cfg(target_arch = "wasm32")]
pub fn defer_signal_update<F>(f: F)
where
    F: FnOnce() + 'static,
{
    dioxus::prelude::spawn(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        f();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn defer_signal_update<F>(f: F)
where
    F: FnOnce() + 'static,
{
    f();
}
