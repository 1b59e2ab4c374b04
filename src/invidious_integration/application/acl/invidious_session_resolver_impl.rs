use std::sync::Arc;

use async_trait::async_trait;

use crate::invidious_integration::{
    domain::model::{
        enums::invidious_integration_error::InvidiousIntegrationError,
        value_objects::{bearer_token::BearerToken, resolved_identity::ResolvedIdentity},
    },
    infrastructure::{
        http::invidious_feed_probe::InvidiousFeedProbe,
        persistence::repositories::invidious_account_repository::InvidiousAccountRepository,
    },
    interfaces::acl::invidious_session_resolver::InvidiousSessionResolver,
};

pub struct InvidiousSessionResolverImpl {
    feed_probe: Arc<dyn InvidiousFeedProbe>,
    account_repository: Arc<dyn InvidiousAccountRepository>,
}

impl InvidiousSessionResolverImpl {
    pub fn new(
        feed_probe: Arc<dyn InvidiousFeedProbe>,
        account_repository: Arc<dyn InvidiousAccountRepository>,
    ) -> Self {
        Self {
            feed_probe,
            account_repository,
        }
    }
}

#[async_trait]
impl InvidiousSessionResolver for InvidiousSessionResolverImpl {
    async fn resolve(&self, raw_token: &str) -> Result<ResolvedIdentity, InvidiousIntegrationError> {
        let token = BearerToken::parse(raw_token);
        tracing::debug!(mode = token.mode().as_str(), "probing invidious feed");

        self.feed_probe.probe(&token).await?;

        let session = token.session_identifier()?;

        self.account_repository
            .find_identity_by_session(&session)
            .await?
            .ok_or(InvidiousIntegrationError::AccountNotFound)
    }
}
