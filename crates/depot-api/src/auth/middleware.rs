//! Auth middleware
//!
//! Runs on every protected route, before any handler or remote-store work.
//! Verification is whatever the configured [`TokenVerifier`] says; with the
//! shipped presence verifier that means any non-empty `Authorization` value.

use crate::auth::models::AuthContext;
use crate::auth::token::TokenVerifier;
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use depot_core::{AppError, AuthError};
use std::sync::Arc;

pub async fn auth_middleware(
    State(verifier): State<Arc<dyn TokenVerifier>>,
    mut request: Request,
    next: Next,
) -> Response {
    let header_value = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("")
        .to_owned();

    if !verifier.verify(&header_value) {
        return HttpAppError(AppError::from(AuthError::MissingToken)).into_response();
    }

    request
        .extensions_mut()
        .insert(AuthContext::from_header(&header_value));

    next.run(request).await
}
