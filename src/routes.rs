//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Plain-text liveness banner
//! - `GET  /health`         - Health check with crate version
//! - `POST /check-urls`     - Verify the file links of a page
//! - `POST /download-excel` - Export records as an XLSX file
//!
//! # Middleware
//!
//! - **CORS** - Any origin, method and header
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, index_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
///
/// Integration tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
///
/// Trailing slashes are trimmed before routing, so `/check-urls/` reaches
/// the same handler as `/check-urls`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
