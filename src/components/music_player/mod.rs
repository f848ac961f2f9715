//! Nav-embedded audio widget: a hidden `<audio>` element driven by
//! [`PlayerState`] plus the transport buttons that mutate it.

use crate::components::media::{self, AUDIO_ELEMENT_ID};
use crate::playlist::PlayerState;
use dioxus::prelude::*;
use tracing::{error, info, warn};

mod controls;

use controls::{MuteButton, NextButton, PlayPauseButton, PrevButton, TrackTitle};

#[derive(Clone, Copy)]
pub struct PlayerSignal(pub Signal<PlayerState>);

#[component]
pub fn MusicPlayer() -> Element {
    let mut player = use_signal(PlayerState::default);
    use_context_provider(|| PlayerSignal(player));

    let index = use_memo(move || player.read().index());
    let muted = use_memo(move || player.read().is_muted());
    let visible = use_memo(move || player.read().is_visible());
    let mut autoplay_attempted = use_signal(|| false);

    // Effects only run on the client, so this is the first client render.
    use_effect(move || {
        media::defer_signal_update(move || {
            player.write().mark_mounted();
        });
    });

    use_effect(move || {
        let muted = muted();
        if !visible() {
            return;
        }
        if let Some(audio) = media::audio_element() {
            media::set_muted(&audio, muted);
        }
    });

    // Follow track changes. Play/pause clicks talk to the element directly.
    use_effect(move || {
        let _ = index();
        if !visible() {
            return;
        }
        let state = *player.peek();
        let (Some(track), Some(audio)) = (state.current_track(), media::audio_element()) else {
            return;
        };
        media::ensure_source(&audio, &track);
        if state.is_playing() {
            spawn(async move {
                let result = media::request_play(&audio).await;
                if let Err(err) = player.peek().on_play_result(result) {
                    error!(title = track.title, "Error playing track: {err}");
                }
            });
        }
    });

    // One autoplay attempt once the playlist is on screen.
    use_effect(move || {
        if !visible() || *autoplay_attempted.peek() {
            return;
        }
        autoplay_attempted.set(true);
        let Some(track) = player.peek().autoplay_target() else {
            return;
        };
        spawn(async move {
            let result = media::play_track(track).await;
            let outcome = player.write().on_autoplay_result(result);
            match outcome {
                Ok(()) => info!(title = track.title, "autoplay started"),
                Err(err) => {
                    warn!("Initial autoplay was prevented, waiting for user interaction: {err}")
                }
            }
        });
    });

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div { class: "custom-music-player flex items-center mx-2 text-cyan-400",
            audio {
                id: AUDIO_ELEMENT_ID,
                preload: "metadata",
                onended: move |_| player.write().on_track_ended(),
            }
            PrevButton {}
            PlayPauseButton {}
            NextButton {}
            TrackTitle {}
            MuteButton {}
        }
    }
}
