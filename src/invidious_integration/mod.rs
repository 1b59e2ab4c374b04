use std::sync::Arc;

use crate::{
    config::app_config::AppConfig,
    invidious_integration::{
        application::acl::invidious_session_resolver_impl::InvidiousSessionResolverImpl,
        infrastructure::{
            http::reqwest_invidious_feed_probe_impl::ReqwestInvidiousFeedProbeImpl,
            persistence::repositories::invidious_account_repository::InvidiousAccountRepository,
        },
        interfaces::acl::invidious_session_resolver::InvidiousSessionResolver,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_invidious_session_resolver(
    config: &AppConfig,
    account_repository: Arc<dyn InvidiousAccountRepository>,
) -> Result<Arc<dyn InvidiousSessionResolver>, String> {
    let client =
        ReqwestInvidiousFeedProbeImpl::build_client(config.upstream_timeout(), config.debug)
            .map_err(|e| e.to_string())?;

    if config.debug {
        tracing::warn!("debug mode: invidious TLS certificates are not verified");
    }

    let feed_probe = Arc::new(ReqwestInvidiousFeedProbeImpl::new(
        client,
        &config.invidious_instance,
    ));

    Ok(Arc::new(InvidiousSessionResolverImpl::new(
        feed_probe,
        account_repository,
    )))
}
