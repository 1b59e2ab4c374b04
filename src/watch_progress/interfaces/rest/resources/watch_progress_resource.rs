use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct WatchProgressResource {
    /// Playback position in seconds.
    pub time: f64,
}
