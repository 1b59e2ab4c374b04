use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct SaveWatchProgressRequestResource {
    /// Playback position in seconds.
    #[validate(range(min = 0.0))]
    pub time: f64,
}
