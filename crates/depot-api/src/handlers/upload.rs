use crate::auth::AuthContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use depot_core::{validate_upload, AppError, AssetResponse, ValidationError};
use depot_storage::UploadContext;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub file: AssetResponse,
}

/// The multipart field carrying the payload.
const FILE_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "files",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded", body = UploadResponse),
        (status = 400, description = "No file, empty filename, disallowed type, or too large", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    ctx: AuthContext,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    // Pull the "file" field out of the multipart body. The whole payload is
    // buffered here and dropped on every exit path below.
    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::from(ValidationError::NoFile))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| AppError::from(ValidationError::NoFile))?;
        file = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) = file.ok_or(AppError::from(ValidationError::NoFile))?;
    if filename.is_empty() {
        return Err(HttpAppError(AppError::from(ValidationError::EmptyFilename)));
    }

    let kind = validate_upload(&filename, bytes.len() as u64).map_err(AppError::from)?;

    let context = UploadContext {
        original_filename: filename.clone(),
        uploaded_by: ctx.actor_label.clone(),
        upload_date: Utc::now(),
    };

    let asset = state.store.store(bytes, &filename, kind, &context).await?;
    tracing::info!(
        public_id = %asset.public_id,
        kind = %asset.storage_kind,
        size = asset.size_bytes,
        uploaded_by = %ctx.actor_label,
        "File uploaded"
    );

    Ok(Json(UploadResponse {
        success: true,
        file: AssetResponse::from(asset),
    }))
}
