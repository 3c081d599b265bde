use crate::auth::AuthContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/api/delete/{public_id}",
    tag = "files",
    params(
        ("public_id" = String, Path, description = "Asset public id; may contain `/` segments")
    ),
    responses(
        (status = 200, description = "Asset deleted", body = DeleteResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 404, description = "Asset not found in any partition", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, _ctx), fields(operation = "delete", public_id = %public_id))]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    _ctx: AuthContext,
    // Remote ids are slash-structured; the wildcard capture hands the full
    // remainder over unmodified instead of treating segments as routing.
    Path(public_id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpAppError> {
    state.store.destroy(&public_id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Deleted".to_string(),
    }))
}
