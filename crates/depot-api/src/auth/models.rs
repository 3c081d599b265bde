//! Request auth context.

use crate::error::ErrorResponse;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::Json;
use depot_core::AuthError;

/// How many characters of the token survive into the audit label.
const ACTOR_LABEL_LEN: usize = 8;

/// The authenticated caller, constructed per request from the
/// `Authorization` header and discarded afterwards. `actor_label` is audit
/// metadata only; it never drives an authorization decision beyond the
/// presence check that produced this context.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub token: String,
    pub actor_label: String,
}

impl AuthContext {
    /// Derive a context from the raw header value. The label is the last
    /// whitespace-separated segment (the token of a `Bearer <token>` header),
    /// truncated.
    pub fn from_header(header_value: &str) -> Self {
        let actor_label = header_value
            .split_whitespace()
            .next_back()
            .unwrap_or("")
            .chars()
            .take(ACTOR_LABEL_LEN)
            .collect();
        AuthContext {
            token: header_value.to_string(),
            actor_label,
        }
    }
}

// Extracted from request extensions (put there by the auth middleware).
// FromRequestParts rather than Extension so handlers taking Multipart can
// still extract it.
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthContext>().cloned().ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(AuthError::MissingToken.to_string())),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_the_truncated_last_segment() {
        let ctx = AuthContext::from_header("Bearer 123456789abcdef");
        assert_eq!(ctx.actor_label, "12345678");
        assert_eq!(ctx.token, "Bearer 123456789abcdef");
    }

    #[test]
    fn bare_tokens_work_without_a_scheme() {
        let ctx = AuthContext::from_header("tok");
        assert_eq!(ctx.actor_label, "tok");
    }
}
