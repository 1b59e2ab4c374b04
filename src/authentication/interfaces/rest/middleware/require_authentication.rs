use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::authentication::domain::{
    model::{
        enums::authentication_error::AuthenticationError,
        value_objects::authenticated_user::AuthenticatedUser,
    },
    services::authentication_gate::AuthenticationGate,
};

/// Runs the gate and attaches [`AuthenticatedUser`] for downstream handlers.
pub async fn require_authentication(
    State(gate): State<Arc<dyn AuthenticationGate>>,
    mut request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match gate.authenticate(authorization).await {
        Ok(identity) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser::new(identity));
            next.run(request).await
        }
        Err(error) => error.into_response(),
    }
}

impl IntoResponse for AuthenticationError {
    fn into_response(self) -> Response {
        match self {
            AuthenticationError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}
