use std::time::Duration;

use async_trait::async_trait;

use crate::invidious_integration::domain::model::value_objects::resolved_identity::ResolvedIdentity;

/// Short-lived token to identity mapping. Keyed by the exact raw token text.
///
/// A live entry stands in for a fresh upstream validation; revocations inside
/// the TTL window are not observed.
#[async_trait]
pub trait IdentityCacheRepository: Send + Sync {
    async fn get(&self, token: &str) -> Option<ResolvedIdentity>;

    async fn put(&self, token: &str, identity: ResolvedIdentity, ttl: Duration);
}
