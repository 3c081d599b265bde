//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Depot API",
        version = "0.1.0",
        description = "Authenticated file gateway: upload, list, and delete files held by a remote media store. Protected endpoints require an Authorization header."
    ),
    paths(
        handlers::login::login,
        handlers::upload::upload_file,
        handlers::files::list_files,
        handlers::delete::delete_file,
    ),
    components(schemas(
        handlers::login::LoginRequest,
        handlers::login::LoginResponse,
        handlers::upload::UploadResponse,
        handlers::files::ListResponse,
        handlers::delete::DeleteResponse,
        error::ErrorResponse,
        depot_core::AssetResponse,
        depot_core::StorageKind,
    ))
)]
pub struct ApiDoc;
