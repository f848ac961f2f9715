//! The nav's fixed playlist and the playback state that walks it.

use crate::error::NavError;

const NO_TRACK_TITLE: &str = "No Track";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub src: &'static str,
}

pub const DEFAULT_PLAYLIST: &[Track] = &[
    Track {
        title: "Ifeellibys",
        src: "https://msos0t2ncxflgtb5.public.blob.vercel-storage.com/music/Ifeellibys-CPfHiYeumxJVkLQ2c9yLbqgx3quzZs.mp3",
    },
    Track {
        title: "Ifeellibys 2",
        src: "https://msos0t2ncxflgtb5.public.blob.vercel-storage.com/music/Ifeellibys%202-IwYzWDjjWtNzyvz0TtHVmoxB7Okpz6.mp3",
    },
    Track {
        title: "Ifeellibys 3",
        src: "https://msos0t2ncxflgtb5.public.blob.vercel-storage.com/music/Ifeellibys%203-vGsvQr4pwxOv69ZaHMWsaY4h1QBNOw.mp3",
    },
    Track {
        title: "Ifeellibys 4",
        src: "https://msos0t2ncxflgtb5.public.blob.vercel-storage.com/music/Ifeellibys%204-wnUswzQdc4qpyZLgThw3xk94WhXER8.mp3",
    },
    Track {
        title: "Ifeellibys 5",
        src: "https://msos0t2ncxflgtb5.public.blob.vercel-storage.com/music/Ifeellibys%205-6jhJZxT9gkJGGfoNkJA743CO2rj0wJ.mp3",
    },
];

/// What the media element has to do after a play/pause toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIntent {
    None,
    Play(Track),
    Pause,
}

/// Transient playback state, owned by one mounted player and reset on remount.
///
/// `index` is always a valid position in `playlist` unless the playlist is
/// empty, in which case every transition is a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    playlist: &'static [Track],
    index: usize,
    playing: bool,
    muted: bool,
    mounted: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYLIST)
    }
}

impl PlayerState {
    pub fn new(playlist: &'static [Track]) -> Self {
        Self {
            playlist,
            index: 0,
            playing: false,
            muted: false,
            mounted: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// The widget only renders on the client, and only with something to play.
    pub fn is_visible(&self) -> bool {
        self.mounted && !self.playlist.is_empty()
    }

    pub fn current_track(&self) -> Option<Track> {
        self.playlist.get(self.index).copied()
    }

    pub fn current_title(&self) -> &'static str {
        self.current_track()
            .map(|track| track.title)
            .unwrap_or(NO_TRACK_TITLE)
    }

    pub fn next(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    pub fn previous(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    /// Media element reached the end of the current track.
    pub fn on_track_ended(&mut self) {
        self.next();
    }

    /// Flips the playing flag. A failed play request later on does not undo it.
    pub fn toggle_play(&mut self) -> PlayIntent {
        let Some(track) = self.current_track() else {
            return PlayIntent::None;
        };
        self.playing = !self.playing;
        if self.playing {
            PlayIntent::Play(track)
        } else {
            PlayIntent::Pause
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn mark_mounted(&mut self) {
        self.mounted = true;
    }

    /// Track zero, when the player is still idle at the start of the playlist.
    pub fn autoplay_target(&self) -> Option<Track> {
        if self.index == 0 && !self.playing {
            self.playlist.first().copied()
        } else {
            None
        }
    }

    /// Settles an autoplay attempt. Only a successful start marks the player
    /// as playing; the result is handed back for logging.
    pub fn on_autoplay_result(&mut self, result: Result<(), NavError>) -> Result<(), NavError> {
        if result.is_ok() {
            self.playing = true;
        }
        result
    }

    /// Settles a play request issued after a toggle or a track change. The
    /// playing flag stays as the user left it either way.
    pub fn on_play_result(&self, result: Result<(), NavError>) -> Result<(), NavError> {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[Track] = &[
        Track { title: "a", src: "https://example.com/a.mp3" },
        Track { title: "b", src: "https://example.com/b.mp3" },
        Track { title: "c", src: "https://example.com/c.mp3" },
        Track { title: "d", src: "https://example.com/d.mp3" },
        Track { title: "e", src: "https://example.com/e.mp3" },
        Track { title: "f", src: "https://example.com/f.mp3" },
        Track { title: "g", src: "https://example.com/g.mp3" },
    ];

    fn at(playlist: &'static [Track], index: usize) -> PlayerState {
        let mut state = PlayerState::new(playlist);
        for _ in 0..index {
            state.next();
        }
        state
    }

    #[test]
    fn test_next_then_previous_returns_to_start() {
        for len in 1..=SAMPLE.len() {
            let playlist = &SAMPLE[..len];
            for start in 0..len {
                let mut state = at(playlist, start);
                state.next();
                state.previous();
                assert_eq!(state.index(), start, "len {len}, start {start}");

                state.previous();
                state.next();
                assert_eq!(state.index(), start, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn test_wraps_at_both_ends() {
        let mut state = at(DEFAULT_PLAYLIST, 4);
        state.next();
        assert_eq!(state.index(), 0);

        state.previous();
        assert_eq!(state.index(), 4);
    }

    #[test]
    fn test_five_nexts_cycle_the_default_playlist() {
        let mut state = PlayerState::default();
        assert_eq!(state.index(), 0);
        for _ in 0..5 {
            state.next();
        }
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_single_track_stays_put() {
        let mut state = PlayerState::new(&SAMPLE[..1]);
        state.next();
        assert_eq!(state.index(), 0);
        state.previous();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_mute_toggles_back() {
        let mut state = PlayerState::default();
        state.toggle_mute();
        assert!(state.is_muted());
        state.toggle_mute();
        assert!(!state.is_muted());
    }

    #[test]
    fn test_empty_playlist_is_inert() {
        let mut state = PlayerState::new(&[]);
        state.mark_mounted();
        state.next();
        state.previous();
        state.on_track_ended();
        assert_eq!(state.index(), 0);
        assert_eq!(state.toggle_play(), PlayIntent::None);
        assert!(!state.is_playing());
        assert!(!state.is_visible());
        assert_eq!(state.current_title(), "No Track");
        assert_eq!(state.autoplay_target(), None);
    }

    #[test]
    fn test_hidden_until_mounted() {
        let mut state = PlayerState::default();
        assert!(!state.is_visible());
        state.mark_mounted();
        assert!(state.is_visible());
    }

    #[test]
    fn test_toggle_play_reports_current_track() {
        let mut state = at(DEFAULT_PLAYLIST, 2);
        assert_eq!(state.toggle_play(), PlayIntent::Play(DEFAULT_PLAYLIST[2]));
        assert!(state.is_playing());
        assert_eq!(state.toggle_play(), PlayIntent::Pause);
        assert!(!state.is_playing());
    }

    #[test]
    fn test_track_end_advances() {
        let mut state = at(DEFAULT_PLAYLIST, 4);
        state.on_track_ended();
        assert_eq!(state.index(), 0);
        assert_eq!(state.current_title(), "Ifeellibys");
    }

    #[test]
    fn test_autoplay_only_from_idle_start() {
        let mut state = PlayerState::default();
        assert_eq!(state.autoplay_target(), Some(DEFAULT_PLAYLIST[0]));

        assert!(state.on_autoplay_result(Ok(())).is_ok());
        assert!(state.is_playing());
        assert_eq!(state.autoplay_target(), None);

        let moved = at(DEFAULT_PLAYLIST, 1);
        assert_eq!(moved.autoplay_target(), None);
    }

    #[test]
    fn test_blocked_autoplay_leaves_player_idle() {
        let mut state = PlayerState::default();
        state.mark_mounted();
        let before = state;

        let rejected = NavError::PlayRejected("NotAllowedError".to_string());
        assert_eq!(state.on_autoplay_result(Err(rejected.clone())), Err(rejected));
        assert!(!state.is_playing());
        assert_eq!(state, before);
        assert_eq!(state.autoplay_target(), Some(DEFAULT_PLAYLIST[0]));
    }

    #[test]
    fn test_failed_play_keeps_toggled_state() {
        let mut state = at(DEFAULT_PLAYLIST, 3);
        assert_eq!(state.toggle_play(), PlayIntent::Play(DEFAULT_PLAYLIST[3]));
        let after_toggle = state;

        let rejected = NavError::PlayRejected("network error".to_string());
        assert_eq!(state.on_play_result(Err(rejected.clone())), Err(rejected));
        assert!(state.is_playing());
        assert_eq!(state, after_toggle);
    }

    #[test]
    fn test_missing_media_element_is_reported_not_fatal() {
        let mut state = PlayerState::default();
        assert_eq!(
            state.on_autoplay_result(Err(NavError::MediaUnavailable)),
            Err(NavError::MediaUnavailable)
        );
        assert!(!state.is_playing());
    }
}
