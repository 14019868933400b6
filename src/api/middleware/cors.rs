//! Cross-origin resource sharing policy.

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS middleware.
///
/// # Policy
///
/// - **Origins**: any
/// - **Methods**: any
/// - **Headers**: any
/// - **Exposed**: `Content-Disposition`, `Content-Type`, so browser clients
///   can read the export filename
///
/// The policy is static; there are no credentials to protect.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([CONTENT_DISPOSITION, CONTENT_TYPE])
}
