use std::sync::Arc;

use axum::Router;

use crate::{
    authentication::domain::services::authentication_gate::AuthenticationGate,
    watch_progress::{
        application::{
            command_services::watch_progress_command_service_impl::WatchProgressCommandServiceImpl,
            query_services::watch_progress_query_service_impl::WatchProgressQueryServiceImpl,
        },
        infrastructure::persistence::repositories::watch_progress_repository::WatchProgressRepository,
        interfaces::rest::controllers::watch_progress_rest_controller::{
            WatchProgressRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_watch_progress_router(
    repository: Arc<dyn WatchProgressRepository>,
    authentication_gate: Arc<dyn AuthenticationGate>,
) -> Router {
    let command_service = Arc::new(WatchProgressCommandServiceImpl::new(repository.clone()));
    let query_service = Arc::new(WatchProgressQueryServiceImpl::new(repository));

    router(
        WatchProgressRestControllerState {
            command_service,
            query_service,
        },
        authentication_gate,
    )
}
