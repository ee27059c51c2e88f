//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: persistence, persist worker, image storage
//! - `/api/*`            - Dashboard REST API
//! - `/uploads/*`        - Uploaded images (only with a local upload directory)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Public path prefix under which uploaded images are served.
pub const UPLOADS_PREFIX: &str = "/uploads";

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `upload_dir` - directory served under [`UPLOADS_PREFIX`]; `None` when
///   images are inlined as data URLs
pub fn app_router(state: AppState, upload_dir: Option<&Path>) -> NormalizePath<Router> {
    let max_upload_bytes = state.profile_service.max_upload_bytes();

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes(max_upload_bytes));

    if let Some(dir) = upload_dir {
        router = router.nest_service(UPLOADS_PREFIX, ServeDir::new(dir));
    }

    let router = router.with_state(state).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
