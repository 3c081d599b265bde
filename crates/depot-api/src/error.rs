//! HTTP error response conversion
//!
//! Wraps `AppError` for axum so every failure renders as the gateway's
//! uniform `{success: false, message}` JSON body with the status code its
//! metadata prescribes.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`
//! and let `?` convert domain errors so they render consistently (status,
//! body, logging).

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use depot_core::{AppError, ErrorMetadata, LogLevel};
use depot_storage::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

/// Failure body shared by every operation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            message: message.into(),
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse. Necessary because of
/// Rust's orphan rules - IntoResponse (external trait) cannot be implemented
/// for AppError (external type from depot-core) here.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<StoreError> for HttpAppError {
    fn from(err: StoreError) -> Self {
        HttpAppError(AppError::from(err))
    }
}

/// JSON body extractor that returns `{success: false, message}` (400) on
/// deserialization failure, instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(inner)) => Ok(ValidatedJson(inner)),
            Err(rejection) => Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!(
                    "Invalid request body: {}",
                    rejection.body_text()
                ))),
            )
                .into_response()),
        }
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        log_error(&self.0);
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::new(self.0.client_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::AuthError;

    #[test]
    fn missing_token_renders_as_401() {
        let response = HttpAppError(AppError::from(AuthError::MissingToken)).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn store_not_found_renders_as_404() {
        let response = HttpAppError::from(StoreError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
