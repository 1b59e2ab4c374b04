use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{
    authentication::{
        domain::{
            model::enums::authentication_error::AuthenticationError,
            services::authentication_gate::AuthenticationGate,
        },
        infrastructure::cache::identity_cache_repository::IdentityCacheRepository,
    },
    invidious_integration::{
        domain::model::{
            enums::invidious_integration_error::InvidiousIntegrationError,
            value_objects::resolved_identity::ResolvedIdentity,
        },
        interfaces::acl::invidious_session_resolver::InvidiousSessionResolver,
    },
};

const BEARER_PREFIX: &str = "bearer ";

pub struct AuthenticationGateImpl {
    session_resolver: Arc<dyn InvidiousSessionResolver>,
    identity_cache: Arc<dyn IdentityCacheRepository>,
    cache_ttl: Duration,
}

impl AuthenticationGateImpl {
    pub fn new(
        session_resolver: Arc<dyn InvidiousSessionResolver>,
        identity_cache: Arc<dyn IdentityCacheRepository>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            session_resolver,
            identity_cache,
            cache_ttl,
        }
    }

    fn extract_bearer_token(authorization: Option<&str>) -> Result<&str, AuthenticationError> {
        let authorization = authorization
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(AuthenticationError::Unauthorized)?;

        let (scheme, token) = authorization
            .split_at_checked(BEARER_PREFIX.len())
            .ok_or(AuthenticationError::Unauthorized)?;

        if !scheme.eq_ignore_ascii_case(BEARER_PREFIX) {
            return Err(AuthenticationError::Unauthorized);
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthenticationError::Unauthorized);
        }

        Ok(token)
    }
}

#[async_trait]
impl AuthenticationGate for AuthenticationGateImpl {
    async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> Result<ResolvedIdentity, AuthenticationError> {
        let token = Self::extract_bearer_token(authorization)?;

        if let Some(identity) = self.identity_cache.get(token).await {
            tracing::debug!("identity cache hit");
            return Ok(identity);
        }

        let identity = self
            .session_resolver
            .resolve(token)
            .await
            .map_err(log_rejection)?;

        self.identity_cache
            .put(token, identity.clone(), self.cache_ttl)
            .await;

        Ok(identity)
    }
}

// Every cause becomes the same outcome; only the log keeps the difference.
fn log_rejection(error: InvidiousIntegrationError) -> AuthenticationError {
    match &error {
        InvidiousIntegrationError::UpstreamUnavailable(_)
        | InvidiousIntegrationError::StorageError(_) => {
            tracing::warn!(%error, "authentication failed on infrastructure error");
        }
        _ => tracing::debug!(%error, "authentication rejected"),
    }

    AuthenticationError::Unauthorized
}
