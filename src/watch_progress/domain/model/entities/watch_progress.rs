use chrono::{DateTime, Utc};

use crate::{
    invidious_integration::domain::model::value_objects::resolved_identity::ResolvedIdentity,
    watch_progress::domain::model::value_objects::{
        playback_position::PlaybackPosition, video_id::VideoId,
    },
};

#[derive(Clone, Debug)]
pub struct WatchProgress {
    owner: ResolvedIdentity,
    video_id: VideoId,
    position: PlaybackPosition,
    updated_at: DateTime<Utc>,
}

impl WatchProgress {
    pub fn new(
        owner: ResolvedIdentity,
        video_id: VideoId,
        position: PlaybackPosition,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            owner,
            video_id,
            position,
            updated_at,
        }
    }

    pub fn owner(&self) -> &ResolvedIdentity {
        &self.owner
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn position(&self) -> PlaybackPosition {
        self.position
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
