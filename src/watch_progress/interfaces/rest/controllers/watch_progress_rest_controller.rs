use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
};
use validator::Validate;

use crate::{
    authentication::{
        domain::{
            model::value_objects::authenticated_user::AuthenticatedUser,
            services::authentication_gate::AuthenticationGate,
        },
        interfaces::rest::middleware::require_authentication::require_authentication,
    },
    shared::interfaces::rest::error_response_resource::ErrorResponseResource,
    watch_progress::{
        domain::{
            model::{
                commands::{
                    delete_watch_progress_command::DeleteWatchProgressCommand,
                    save_watch_progress_command::SaveWatchProgressCommand,
                },
                entities::watch_progress::WatchProgress,
                enums::watch_progress_domain_error::WatchProgressDomainError,
                queries::get_watch_progress_query::GetWatchProgressQuery,
            },
            services::{
                watch_progress_command_service::WatchProgressCommandService,
                watch_progress_query_service::WatchProgressQueryService,
            },
        },
        interfaces::rest::resources::{
            save_watch_progress_request_resource::SaveWatchProgressRequestResource,
            watch_progress_resource::WatchProgressResource,
        },
    },
};

#[derive(Clone)]
pub struct WatchProgressRestControllerState {
    pub command_service: Arc<dyn WatchProgressCommandService>,
    pub query_service: Arc<dyn WatchProgressQueryService>,
}

/// Every route here sits behind the authentication gate. Handlers only ever
/// read the owner from [`AuthenticatedUser`].
pub fn router(
    state: WatchProgressRestControllerState,
    authentication_gate: Arc<dyn AuthenticationGate>,
) -> Router {
    Router::new()
        .route(
            "/video/:video_id",
            get(get_watch_progress)
                .post(save_watch_progress)
                .delete(delete_watch_progress),
        )
        .route_layer(middleware::from_fn_with_state(
            authentication_gate,
            require_authentication,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/video/{video_id}",
    tag = "watch-progress",
    params(("video_id" = String, Path, description = "11 character video id")),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Saved playback position", body = WatchProgressResource),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "No position saved for this video", body = ErrorResponseResource),
        (status = 422, description = "Invalid video id", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn get_watch_progress(
    State(state): State<WatchProgressRestControllerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(video_id): Path<String>,
) -> Result<Json<WatchProgressResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let query =
        GetWatchProgressQuery::new(user.identity().clone(), video_id).map_err(map_domain_error)?;

    let progress = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_resource(&progress)))
}

#[utoipa::path(
    post,
    path = "/video/{video_id}",
    tag = "watch-progress",
    params(("video_id" = String, Path, description = "11 character video id")),
    request_body = SaveWatchProgressRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 204, description = "Playback position saved"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 422, description = "Invalid video id or position", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn save_watch_progress(
    State(state): State<WatchProgressRestControllerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(video_id): Path<String>,
    Json(request): Json<SaveWatchProgressRequestResource>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponseResource::new(validation_error.to_string())),
        ));
    }

    let command = SaveWatchProgressCommand::new(user.identity().clone(), video_id, request.time)
        .map_err(map_domain_error)?;

    state
        .command_service
        .handle_save(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/video/{video_id}",
    tag = "watch-progress",
    params(("video_id" = String, Path, description = "11 character video id")),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 204, description = "Playback position removed"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "No position saved for this video", body = ErrorResponseResource),
        (status = 422, description = "Invalid video id", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn delete_watch_progress(
    State(state): State<WatchProgressRestControllerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(video_id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponseResource>)> {
    let command = DeleteWatchProgressCommand::new(user.identity().clone(), video_id)
        .map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn to_resource(progress: &WatchProgress) -> WatchProgressResource {
    WatchProgressResource {
        time: progress.position().seconds(),
    }
}

fn map_domain_error(error: WatchProgressDomainError) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        WatchProgressDomainError::InvalidVideoId
        | WatchProgressDomainError::InvalidPlaybackPosition => StatusCode::UNPROCESSABLE_ENTITY,
        WatchProgressDomainError::ProgressNotFound => StatusCode::NOT_FOUND,
        WatchProgressDomainError::InfrastructureError(ref message) => {
            tracing::error!(%message, "watch progress storage failure");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponseResource::new("internal error")),
            );
        }
    };

    (status, Json(ErrorResponseResource::new(error.to_string())))
}
