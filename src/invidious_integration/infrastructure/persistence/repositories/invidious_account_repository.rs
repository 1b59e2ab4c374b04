use async_trait::async_trait;

use crate::invidious_integration::domain::model::{
    enums::invidious_integration_error::InvidiousIntegrationError,
    value_objects::{resolved_identity::ResolvedIdentity, session_identifier::SessionIdentifier},
};

/// Read-only view over Invidious' own tables.
#[async_trait]
pub trait InvidiousAccountRepository: Send + Sync {
    async fn find_identity_by_session(
        &self,
        session: &SessionIdentifier,
    ) -> Result<Option<ResolvedIdentity>, InvidiousIntegrationError>;

    async fn list_identities(&self) -> Result<Vec<ResolvedIdentity>, InvidiousIntegrationError>;
}
