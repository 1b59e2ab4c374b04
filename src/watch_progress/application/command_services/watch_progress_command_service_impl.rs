use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::watch_progress::{
    domain::{
        model::{
            commands::{
                delete_watch_progress_command::DeleteWatchProgressCommand,
                save_watch_progress_command::SaveWatchProgressCommand,
            },
            entities::watch_progress::WatchProgress,
            enums::watch_progress_domain_error::WatchProgressDomainError,
        },
        services::watch_progress_command_service::WatchProgressCommandService,
    },
    infrastructure::persistence::repositories::watch_progress_repository::WatchProgressRepository,
};

pub struct WatchProgressCommandServiceImpl {
    repository: Arc<dyn WatchProgressRepository>,
}

impl WatchProgressCommandServiceImpl {
    pub fn new(repository: Arc<dyn WatchProgressRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl WatchProgressCommandService for WatchProgressCommandServiceImpl {
    async fn handle_save(
        &self,
        command: SaveWatchProgressCommand,
    ) -> Result<WatchProgress, WatchProgressDomainError> {
        let progress = WatchProgress::new(
            command.owner().clone(),
            command.video_id().clone(),
            command.position(),
            Utc::now(),
        );

        self.repository.save(&progress).await?;

        Ok(progress)
    }

    async fn handle_delete(
        &self,
        command: DeleteWatchProgressCommand,
    ) -> Result<(), WatchProgressDomainError> {
        let deleted = self
            .repository
            .delete(command.owner(), command.video_id())
            .await?;

        if !deleted {
            return Err(WatchProgressDomainError::ProgressNotFound);
        }

        Ok(())
    }
}
