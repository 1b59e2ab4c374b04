use crate::watch_progress::domain::model::enums::watch_progress_domain_error::WatchProgressDomainError;

/// Seconds from the start of the video.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackPosition(f64);

impl PlaybackPosition {
    pub fn new(seconds: f64) -> Result<Self, WatchProgressDomainError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(WatchProgressDomainError::InvalidPlaybackPosition);
        }

        Ok(Self(seconds))
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }
}
