use super::PlayerSignal;
use crate::components::media;
use crate::components::Icon;
use crate::playlist::PlayIntent;
use dioxus::prelude::*;
use tracing::error;

const BUTTON_CLASS: &str = "nav-player-btn bg-transparent border-none p-1 focus:outline-none hover:text-cyan-300 transition-colors duration-150 ease-in-out";
const ICON_CLASS: &str = "w-[18px] h-[18px]";

#[component]
pub(super) fn PrevButton() -> Element {
    let mut player = use_context::<PlayerSignal>().0;

    rsx! {
        button {
            id: "nav-prev-btn",
            r#type: "button",
            title: "Previous track",
            class: BUTTON_CLASS,
            onclick: move |_| player.write().previous(),
            Icon { name: "prev".to_string(), class: ICON_CLASS.to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let mut player = use_context::<PlayerSignal>().0;

    rsx! {
        button {
            id: "nav-next-btn",
            r#type: "button",
            title: "Next track",
            class: BUTTON_CLASS,
            onclick: move |_| player.write().next(),
            Icon { name: "next".to_string(), class: ICON_CLASS.to_string() }
        }
    }
}

/// Flips the playing flag first, then drives the element. A rejected play
/// request is logged and the flag is left as toggled.
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut player = use_context::<PlayerSignal>().0;
    let playing = player.read().is_playing();

    let on_toggle = move |_| {
        let intent = player.write().toggle_play();
        match intent {
            PlayIntent::Play(track) => {
                spawn(async move {
                    let result = media::play_track(track).await;
                    if let Err(err) = player.peek().on_play_result(result) {
                        error!(title = track.title, "Error playing audio: {err}");
                    }
                });
            }
            PlayIntent::Pause => {
                if let Some(audio) = media::audio_element() {
                    media::pause(&audio);
                }
            }
            PlayIntent::None => {}
        }
    };

    rsx! {
        button {
            id: "nav-play-pause-btn",
            r#type: "button",
            title: if playing { "Pause" } else { "Play" },
            class: "{BUTTON_CLASS} mx-1",
            onclick: on_toggle,
            if playing {
                Icon { name: "pause".to_string(), class: ICON_CLASS.to_string() }
            } else {
                Icon { name: "play".to_string(), class: ICON_CLASS.to_string() }
            }
        }
    }
}

#[component]
pub(super) fn MuteButton() -> Element {
    let mut player = use_context::<PlayerSignal>().0;
    let muted = player.read().is_muted();

    rsx! {
        button {
            id: "nav-mute-btn",
            r#type: "button",
            title: if muted { "Unmute" } else { "Mute" },
            class: "{BUTTON_CLASS} ml-1",
            onclick: move |_| player.write().toggle_mute(),
            if muted {
                Icon { name: "volume-mute".to_string(), class: ICON_CLASS.to_string() }
            } else {
                Icon { name: "volume".to_string(), class: ICON_CLASS.to_string() }
            }
        }
    }
}

#[component]
pub(super) fn TrackTitle() -> Element {
    let player = use_context::<PlayerSignal>().0;
    let title = player.read().current_title();

    rsx! {
        div {
            class: "min-w-[100px] max-w-[200px] text-xs mx-2 hidden sm:block overflow-hidden text-ellipsis whitespace-nowrap hover:overflow-visible hover:whitespace-normal hover:bg-black/20 hover:p-1 hover:rounded transition-all duration-150",
            title: "{title}",
            "{title}"
        }
    }
}
