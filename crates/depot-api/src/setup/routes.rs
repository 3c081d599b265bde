//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::auth::middleware::auth_middleware;
use crate::constants::{API_PREFIX, MAX_REQUEST_BODY_BYTES};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes.
pub fn setup_routes(state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(&state.config.cors_origins)?;

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/", get(handlers::index::serve_index))
        .route(&format!("{API_PREFIX}/login"), post(handlers::login::login))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .with_state(state.clone());

    // Protected routes: the presence check runs before any handler or
    // remote-store work.
    let protected_routes = Router::new()
        .route(
            &format!("{API_PREFIX}/upload"),
            post(handlers::upload::upload_file),
        )
        .route(
            &format!("{API_PREFIX}/files"),
            get(handlers::files::list_files),
        )
        .route(
            &format!("{API_PREFIX}/delete/{{*public_id}}"),
            delete(handlers::delete::delete_file),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.verifier.clone(),
            auth_middleware,
        ))
        .with_state(state);

    Ok(public_routes
        .merge(protected_routes)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

fn setup_cors(origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    if origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<_, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any))
}
