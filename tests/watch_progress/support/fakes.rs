use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use syncious::{
    authentication::domain::{
        model::enums::authentication_error::AuthenticationError,
        services::authentication_gate::AuthenticationGate,
    },
    invidious_integration::domain::model::value_objects::resolved_identity::ResolvedIdentity,
    watch_progress::{
        domain::model::{
            entities::watch_progress::WatchProgress,
            enums::watch_progress_domain_error::WatchProgressDomainError,
            value_objects::video_id::VideoId,
        },
        infrastructure::persistence::repositories::watch_progress_repository::WatchProgressRepository,
    },
};

type ProgressKey = (String, String);

#[derive(Default)]
struct FakeWatchProgressRepositoryState {
    entries: HashMap<ProgressKey, WatchProgress>,
    should_fail: bool,
}

pub struct FakeWatchProgressRepository {
    state: Mutex<FakeWatchProgressRepositoryState>,
}

impl FakeWatchProgressRepository {
    pub fn with_entries(entries: Vec<WatchProgress>) -> Self {
        let entries = entries
            .into_iter()
            .map(|progress| (Self::key(progress.owner(), progress.video_id()), progress))
            .collect();

        Self {
            state: Mutex::new(FakeWatchProgressRepositoryState {
                entries,
                should_fail: false,
            }),
        }
    }

    pub fn failing() -> Self {
        Self {
            state: Mutex::new(FakeWatchProgressRepositoryState {
                entries: HashMap::new(),
                should_fail: true,
            }),
        }
    }

    pub fn stored_seconds(&self, owner: &str, video_id: &str) -> Option<f64> {
        let state = self.state.lock().expect("mutex poisoned");
        state
            .entries
            .get(&(owner.to_string(), video_id.to_string()))
            .map(|progress| progress.position().seconds())
    }

    pub fn len(&self) -> usize {
        self.state.lock().expect("mutex poisoned").entries.len()
    }

    fn key(owner: &ResolvedIdentity, video_id: &VideoId) -> ProgressKey {
        (owner.value().to_string(), video_id.value().to_string())
    }

    fn check_failure(
        state: &FakeWatchProgressRepositoryState,
    ) -> Result<(), WatchProgressDomainError> {
        if state.should_fail {
            return Err(WatchProgressDomainError::InfrastructureError(
                "connection reset by peer".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl WatchProgressRepository for FakeWatchProgressRepository {
    async fn save(&self, progress: &WatchProgress) -> Result<(), WatchProgressDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;
        state.entries.insert(
            Self::key(progress.owner(), progress.video_id()),
            progress.clone(),
        );
        Ok(())
    }

    async fn find(
        &self,
        owner: &ResolvedIdentity,
        video_id: &VideoId,
    ) -> Result<Option<WatchProgress>, WatchProgressDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;
        Ok(state.entries.get(&Self::key(owner, video_id)).cloned())
    }

    async fn delete(
        &self,
        owner: &ResolvedIdentity,
        video_id: &VideoId,
    ) -> Result<bool, WatchProgressDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;
        Ok(state.entries.remove(&Self::key(owner, video_id)).is_some())
    }

    async fn delete_all_except_owners(
        &self,
        known_owners: &[ResolvedIdentity],
    ) -> Result<u64, WatchProgressDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;
        let before = state.entries.len();
        state
            .entries
            .retain(|(owner, _), _| known_owners.iter().any(|known| known.value() == owner));
        Ok((before - state.entries.len()) as u64)
    }
}

/// Accepts `Bearer <token>` for a fixed token table and nothing else.
pub struct StaticAuthenticationGate {
    tokens: HashMap<String, ResolvedIdentity>,
}

impl StaticAuthenticationGate {
    pub fn new(tokens: &[(&str, &str)]) -> Self {
        Self {
            tokens: tokens
                .iter()
                .map(|(token, owner)| {
                    (
                        token.to_string(),
                        ResolvedIdentity::new(owner).expect("valid identity"),
                    )
                })
                .collect(),
        }
    }
}

#[async_trait]
impl AuthenticationGate for StaticAuthenticationGate {
    async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> Result<ResolvedIdentity, AuthenticationError> {
        authorization
            .and_then(|value| value.strip_prefix("Bearer "))
            .and_then(|token| self.tokens.get(token))
            .cloned()
            .ok_or(AuthenticationError::Unauthorized)
    }
}
