use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use sqlx::{migrate, postgres::PgPoolOptions};
use syncious::{
    account_reconciliation::{
        application::command_services::account_reconciliation_service_impl::AccountReconciliationServiceImpl,
        spawn_reconciliation_schedule,
    },
    authentication::build_authentication_gate,
    config::app_config::AppConfig,
    invidious_integration::{
        build_invidious_session_resolver,
        infrastructure::persistence::repositories::{
            invidious_account_repository::InvidiousAccountRepository,
            postgres::sqlx_invidious_account_repository_impl::SqlxInvidiousAccountRepositoryImpl,
        },
    },
    shared::interfaces::rest::{
        cors::build_cors_layer, error_response_resource::ErrorResponseResource,
        openapi::security::BearerSecurityAddon,
    },
    watch_progress::{
        build_watch_progress_router,
        infrastructure::persistence::repositories::{
            postgres::sqlx_watch_progress_repository_impl::SqlxWatchProgressRepositoryImpl,
            watch_progress_repository::WatchProgressRepository,
        },
        interfaces::rest::resources::{
            save_watch_progress_request_resource::SaveWatchProgressRequestResource,
            watch_progress_resource::WatchProgressResource,
        },
    },
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        syncious::watch_progress::interfaces::rest::controllers::watch_progress_rest_controller::get_watch_progress,
        syncious::watch_progress::interfaces::rest::controllers::watch_progress_rest_controller::save_watch_progress,
        syncious::watch_progress::interfaces::rest::controllers::watch_progress_rest_controller::delete_watch_progress
    ),
    components(
        schemas(
            WatchProgressResource,
            SaveWatchProgressRequestResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "watch-progress", description = "Per-user playback positions, authenticated through Invidious")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().expect("invalid configuration");

    let pool = PgPoolOptions::new()
        .connect(&config.database_url())
        .await
        .expect("failed to connect to postgres");

    migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let account_repository: Arc<dyn InvidiousAccountRepository> =
        Arc::new(SqlxInvidiousAccountRepositoryImpl::new(pool.clone()));
    let progress_repository: Arc<dyn WatchProgressRepository> =
        Arc::new(SqlxWatchProgressRepositoryImpl::new(pool.clone()));

    let session_resolver = build_invidious_session_resolver(&config, account_repository.clone())
        .expect("failed to build invidious session resolver");
    let authentication_gate = build_authentication_gate(&config, session_resolver);

    let reconciliation = spawn_reconciliation_schedule(
        Arc::new(AccountReconciliationServiceImpl::new(
            account_repository,
            progress_repository.clone(),
        )),
        config.reconciliation_interval(),
    );

    let app = Router::new()
        .merge(build_watch_progress_router(
            progress_repository,
            authentication_gate,
        ))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(build_cors_layer(&config.cors_origins()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(%addr, invidious = %config.invidious_instance, "syncious listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("failed to start axum server");

    reconciliation.abort();
    pool.close().await;
    tracing::info!("syncious stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
