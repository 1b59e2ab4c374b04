use crate::{
    invidious_integration::domain::model::value_objects::resolved_identity::ResolvedIdentity,
    watch_progress::domain::model::{
        enums::watch_progress_domain_error::WatchProgressDomainError, value_objects::video_id::VideoId,
    },
};

#[derive(Clone, Debug)]
pub struct DeleteWatchProgressCommand {
    owner: ResolvedIdentity,
    video_id: VideoId,
}

impl DeleteWatchProgressCommand {
    pub fn new(owner: ResolvedIdentity, video_id: String) -> Result<Self, WatchProgressDomainError> {
        Ok(Self {
            owner,
            video_id: VideoId::new(video_id)?,
        })
    }

    pub fn owner(&self) -> &ResolvedIdentity {
        &self.owner
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }
}
