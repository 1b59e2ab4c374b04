use async_trait::async_trait;

use crate::watch_progress::domain::model::{
    entities::watch_progress::WatchProgress,
    enums::watch_progress_domain_error::WatchProgressDomainError,
    queries::get_watch_progress_query::GetWatchProgressQuery,
};

#[async_trait]
pub trait WatchProgressQueryService: Send + Sync {
    async fn handle_get(
        &self,
        query: GetWatchProgressQuery,
    ) -> Result<WatchProgress, WatchProgressDomainError>;
}
