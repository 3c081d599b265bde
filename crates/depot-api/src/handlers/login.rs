use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, Json};
use depot_core::{AppError, AuthError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub username: String,
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded, token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, body), fields(operation = "login"))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpAppError> {
    // One failure path for unknown user and wrong secret: callers cannot
    // tell which was the case.
    if !state.credentials.verify(&body.username, &body.password).await {
        return Err(HttpAppError(AppError::from(AuthError::InvalidCredentials)));
    }

    // The token is issued, returned, and forgotten. No other operation ever
    // verifies it against anything.
    let token = state.verifier.issue();
    tracing::info!(username = %body.username, "Login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        token,
        username: body.username,
    }))
}
