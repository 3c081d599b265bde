use crate::auth::AuthContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, Json};
use depot_core::AssetResponse;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse {
    pub success: bool,
    pub files: Vec<AssetResponse>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/api/files",
    tag = "files",
    responses(
        (status = 200, description = "Assets under the gateway namespace", body = ListResponse),
        (status = 401, description = "Missing token", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, _ctx), fields(operation = "list"))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    _ctx: AuthContext,
) -> Result<Json<ListResponse>, HttpAppError> {
    let files: Vec<AssetResponse> = state
        .store
        .list()
        .await?
        .into_iter()
        .map(AssetResponse::from)
        .collect();

    Ok(Json(ListResponse {
        success: true,
        count: files.len(),
        files,
    }))
}
