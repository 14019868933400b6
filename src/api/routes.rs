//! API route configuration.

use crate::api::handlers::{check_urls_handler, download_excel_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Report API routes. No authentication.
///
/// # Endpoints
///
/// - `POST /check-urls`     - Verify the file links of a page
/// - `POST /download-excel` - Export records as an XLSX file
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/check-urls", post(check_urls_handler))
        .route("/download-excel", post(download_excel_handler))
}
