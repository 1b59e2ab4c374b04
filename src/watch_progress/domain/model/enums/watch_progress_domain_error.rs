use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchProgressDomainError {
    #[error("video id is invalid; use 11 characters of [A-Za-z0-9_-]")]
    InvalidVideoId,

    #[error("playback position is invalid; use a finite number of seconds >= 0")]
    InvalidPlaybackPosition,

    #[error("watch progress not found")]
    ProgressNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
