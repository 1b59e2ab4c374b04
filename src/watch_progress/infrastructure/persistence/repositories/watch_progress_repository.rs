use async_trait::async_trait;

use crate::{
    invidious_integration::domain::model::value_objects::resolved_identity::ResolvedIdentity,
    watch_progress::domain::model::{
        entities::watch_progress::WatchProgress,
        enums::watch_progress_domain_error::WatchProgressDomainError,
        value_objects::video_id::VideoId,
    },
};

#[async_trait]
pub trait WatchProgressRepository: Send + Sync {
    /// Inserts or overwrites the position for `(owner, video_id)`.
    async fn save(&self, progress: &WatchProgress) -> Result<(), WatchProgressDomainError>;

    async fn find(
        &self,
        owner: &ResolvedIdentity,
        video_id: &VideoId,
    ) -> Result<Option<WatchProgress>, WatchProgressDomainError>;

    /// Returns whether a record existed.
    async fn delete(
        &self,
        owner: &ResolvedIdentity,
        video_id: &VideoId,
    ) -> Result<bool, WatchProgressDomainError>;

    /// Removes every record whose owner is not in `known_owners`.
    async fn delete_all_except_owners(
        &self,
        known_owners: &[ResolvedIdentity],
    ) -> Result<u64, WatchProgressDomainError>;
}
