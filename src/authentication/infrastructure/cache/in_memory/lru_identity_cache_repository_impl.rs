use std::{
    num::NonZeroUsize,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use lru::LruCache;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

use crate::{
    authentication::infrastructure::cache::identity_cache_repository::IdentityCacheRepository,
    invidious_integration::domain::model::value_objects::resolved_identity::ResolvedIdentity,
    shared::infrastructure::clock::Clock,
};

#[derive(Clone)]
struct CachedIdentity {
    identity: ResolvedIdentity,
    expires_at: Instant,
}

/// Bounded TTL cache. Least recently used entries are evicted once full.
pub struct LruIdentityCacheRepositoryImpl {
    entries: Mutex<LruCache<String, CachedIdentity>>,
    clock: Arc<dyn Clock>,
}

impl LruIdentityCacheRepositoryImpl {
    pub fn new(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            clock,
        }
    }

    fn token_hash(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Number of stored entries, expired ones included until they are touched.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl IdentityCacheRepository for LruIdentityCacheRepositoryImpl {
    async fn get(&self, token: &str) -> Option<ResolvedIdentity> {
        let key = Self::token_hash(token);
        let now = self.clock.now();
        let mut guard = self.entries.lock().await;

        let cached = guard
            .get(&key)
            .map(|entry| (entry.expires_at > now).then(|| entry.identity.clone()));

        match cached {
            Some(Some(identity)) => Some(identity),
            Some(None) => {
                guard.pop(&key);
                None
            }
            None => None,
        }
    }

    async fn put(&self, token: &str, identity: ResolvedIdentity, ttl: Duration) {
        let Some(expires_at) = self.clock.now().checked_add(ttl) else {
            tracing::warn!(
                ttl_seconds = ttl.as_secs(),
                "identity cache ttl overflows, not caching"
            );
            return;
        };
        let entry = CachedIdentity {
            identity,
            expires_at,
        };

        self.entries.lock().await.put(Self::token_hash(token), entry);
    }
}
