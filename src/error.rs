use thiserror::Error;

/// Playback failures. None of these reach the user; callers log and move on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("Audio element is not available")]
    MediaUnavailable,

    #[error("Play request was rejected: {0}")]
    PlayRejected(String),
}
