use async_trait::async_trait;

use crate::watch_progress::domain::model::{
    commands::{
        delete_watch_progress_command::DeleteWatchProgressCommand,
        save_watch_progress_command::SaveWatchProgressCommand,
    },
    entities::watch_progress::WatchProgress,
    enums::watch_progress_domain_error::WatchProgressDomainError,
};

#[async_trait]
pub trait WatchProgressCommandService: Send + Sync {
    async fn handle_save(
        &self,
        command: SaveWatchProgressCommand,
    ) -> Result<WatchProgress, WatchProgressDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteWatchProgressCommand,
    ) -> Result<(), WatchProgressDomainError>;
}
