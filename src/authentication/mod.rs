use std::sync::Arc;

use crate::{
    authentication::{
        application::services::authentication_gate_impl::AuthenticationGateImpl,
        domain::services::authentication_gate::AuthenticationGate,
        infrastructure::cache::in_memory::lru_identity_cache_repository_impl::LruIdentityCacheRepositoryImpl,
    },
    config::app_config::AppConfig,
    invidious_integration::interfaces::acl::invidious_session_resolver::InvidiousSessionResolver,
    shared::infrastructure::clock::SystemClock,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_authentication_gate(
    config: &AppConfig,
    session_resolver: Arc<dyn InvidiousSessionResolver>,
) -> Arc<dyn AuthenticationGate> {
    let identity_cache = Arc::new(LruIdentityCacheRepositoryImpl::new(
        config.identity_cache_capacity,
        Arc::new(SystemClock),
    ));

    Arc::new(AuthenticationGateImpl::new(
        session_resolver,
        identity_cache,
        config.identity_cache_ttl(),
    ))
}
