use crate::{
    invidious_integration::domain::model::value_objects::resolved_identity::ResolvedIdentity,
    watch_progress::domain::model::{
        enums::watch_progress_domain_error::WatchProgressDomainError,
        value_objects::{playback_position::PlaybackPosition, video_id::VideoId},
    },
};

#[derive(Clone, Debug)]
pub struct SaveWatchProgressCommand {
    owner: ResolvedIdentity,
    video_id: VideoId,
    position: PlaybackPosition,
}

impl SaveWatchProgressCommand {
    pub fn new(
        owner: ResolvedIdentity,
        video_id: String,
        position_seconds: f64,
    ) -> Result<Self, WatchProgressDomainError> {
        Ok(Self {
            owner,
            video_id: VideoId::new(video_id)?,
            position: PlaybackPosition::new(position_seconds)?,
        })
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
}
