use std::sync::Arc;

use async_trait::async_trait;

use crate::watch_progress::{
    domain::{
        model::{
            entities::watch_progress::WatchProgress,
            enums::watch_progress_domain_error::WatchProgressDomainError,
            queries::get_watch_progress_query::GetWatchProgressQuery,
        },
        services::watch_progress_query_service::WatchProgressQueryService,
    },
    infrastructure::persistence::repositories::watch_progress_repository::WatchProgressRepository,
};

pub struct WatchProgressQueryServiceImpl {
    repository: Arc<dyn WatchProgressRepository>,
}

impl WatchProgressQueryServiceImpl {
    pub fn new(repository: Arc<dyn WatchProgressRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl WatchProgressQueryService for WatchProgressQueryServiceImpl {
    async fn handle_get(
        &self,
        query: GetWatchProgressQuery,
    ) -> Result<WatchProgress, WatchProgressDomainError> {
        self.repository
            .find(query.owner(), query.video_id())
            .await?
            .ok_or(WatchProgressDomainError::ProgressNotFound)
    }
}
