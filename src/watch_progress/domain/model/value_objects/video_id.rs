use lazy_static::lazy_static;
use regex::Regex;

use crate::watch_progress::domain::model::enums::watch_progress_domain_error::WatchProgressDomainError;

lazy_static! {
    static ref VIDEO_ID_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("valid regex");
}

/// YouTube-style video id, as used by Invidious.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(value: String) -> Result<Self, WatchProgressDomainError> {
        if !VIDEO_ID_PATTERN.is_match(&value) {
            return Err(WatchProgressDomainError::InvalidVideoId);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
