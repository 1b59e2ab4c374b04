use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::{
    invidious_integration::domain::model::value_objects::resolved_identity::ResolvedIdentity,
    watch_progress::{
        domain::model::{
            entities::watch_progress::WatchProgress,
            enums::watch_progress_domain_error::WatchProgressDomainError,
            value_objects::{playback_position::PlaybackPosition, video_id::VideoId},
        },
        infrastructure::persistence::repositories::watch_progress_repository::WatchProgressRepository,
    },
};

pub struct SqlxWatchProgressRepositoryImpl {
    pool: PgPool,
}

impl SqlxWatchProgressRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<WatchProgress, WatchProgressDomainError> {
        let video_id_raw: String = row.try_get("video_id").map_err(map_infra_error)?;
        let username_raw: String = row.try_get("username").map_err(map_infra_error)?;
        let position_seconds: f64 = row.try_get("position_seconds").map_err(map_infra_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_infra_error)?;

        let owner = ResolvedIdentity::new(&username_raw).map_err(|_| {
            WatchProgressDomainError::InfrastructureError("invalid username stored".to_string())
        })?;

        Ok(WatchProgress::new(
            owner,
            VideoId::new(video_id_raw)?,
            PlaybackPosition::new(position_seconds)?,
            updated_at,
        ))
    }
}

#[async_trait]
impl WatchProgressRepository for SqlxWatchProgressRepositoryImpl {
    async fn save(&self, progress: &WatchProgress) -> Result<(), WatchProgressDomainError> {
        let statement = r#"
            INSERT INTO syncious_watch_progress (video_id, username, position_seconds, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (video_id, username)
            DO UPDATE SET
                position_seconds = EXCLUDED.position_seconds,
                updated_at = EXCLUDED.updated_at
        "#;

        sqlx::query(statement)
            .bind(progress.video_id().value())
            .bind(progress.owner().value())
            .bind(progress.position().seconds())
            .bind(progress.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn find(
        &self,
        owner: &ResolvedIdentity,
        video_id: &VideoId,
    ) -> Result<Option<WatchProgress>, WatchProgressDomainError> {
        let statement = r#"
            SELECT video_id, username, position_seconds, updated_at
            FROM syncious_watch_progress
            WHERE video_id = $1 AND username = $2
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(video_id.value())
            .bind(owner.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn delete(
        &self,
        owner: &ResolvedIdentity,
        video_id: &VideoId,
    ) -> Result<bool, WatchProgressDomainError> {
        let statement = r#"
            DELETE FROM syncious_watch_progress
            WHERE video_id = $1 AND username = $2
        "#;

        let result = sqlx::query(statement)
            .bind(video_id.value())
            .bind(owner.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_except_owners(
        &self,
        known_owners: &[ResolvedIdentity],
    ) -> Result<u64, WatchProgressDomainError> {
        let statement = r#"
            DELETE FROM syncious_watch_progress
            WHERE username <> ALL($1)
        "#;

        let owners: Vec<String> = known_owners
            .iter()
            .map(|owner| owner.value().to_string())
            .collect();

        let result = sqlx::query(statement)
            .bind(owners)
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected())
    }
}

fn map_infra_error(error: sqlx::Error) -> WatchProgressDomainError {
    WatchProgressDomainError::InfrastructureError(error.to_string())
}
