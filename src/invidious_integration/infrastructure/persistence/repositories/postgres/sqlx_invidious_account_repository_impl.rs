use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::invidious_integration::{
    domain::model::{
        enums::invidious_integration_error::InvidiousIntegrationError,
        value_objects::{
            resolved_identity::ResolvedIdentity, session_identifier::SessionIdentifier,
        },
    },
    infrastructure::persistence::repositories::invidious_account_repository::InvidiousAccountRepository,
};

/// Queries Invidious' `session_ids` and `users` tables directly.
///
/// Invidious exposes no API that maps a session id to its account, so this
/// repository is coupled to its schema. Keep every such query in this file.
pub struct SqlxInvidiousAccountRepositoryImpl {
    pool: PgPool,
}

impl SqlxInvidiousAccountRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvidiousAccountRepository for SqlxInvidiousAccountRepositoryImpl {
    async fn find_identity_by_session(
        &self,
        session: &SessionIdentifier,
    ) -> Result<Option<ResolvedIdentity>, InvidiousIntegrationError> {
        let statement = r#"
            SELECT email
            FROM session_ids
            WHERE id = $1
            LIMIT 1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(session.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row
            .map(|row| {
                let email: String = row.try_get("email").map_err(map_infra_error)?;
                ResolvedIdentity::new(&email)
            })
            .transpose()
    }

    async fn list_identities(&self) -> Result<Vec<ResolvedIdentity>, InvidiousIntegrationError> {
        let statement = r#"
            SELECT email
            FROM users
        "#;

        let rows = sqlx::query(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter()
            .map(|row| {
                let email: String = row.try_get("email").map_err(map_infra_error)?;
                ResolvedIdentity::new(&email)
            })
            .collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> InvidiousIntegrationError {
    InvidiousIntegrationError::StorageError(error.to_string())
}
