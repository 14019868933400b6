//! Handler for the link verification endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::check_urls::CheckUrlsRequest;
use crate::domain::entities::LinkRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Fetches a page and reports the status of its file links.
///
/// # Endpoint
///
/// `POST /check-urls`
///
/// # Request Body
///
/// ```json
/// { "base_url": "https://site.gov.br/pagina" }
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "URL": "https://site.gov.br/pagina/docs/report.pdf", "Status": "OK" },
///   { "URL": "https://site.gov.br/pagina/img/logo.png", "Status": "Erro 404" }
/// ]
/// ```
///
/// Links are probed one after another, so the response time grows with the
/// number of links on the page.
///
/// # Errors
///
/// - **400 Bad Request**: body is not valid JSON, `base_url` is not a string,
///   or `base_url` is missing or empty
/// - **500 Internal Server Error**: the page could not be fetched
pub async fn check_urls_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckUrlsRequest>, JsonRejection>,
) -> Result<Json<Vec<LinkRecord>>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let records = state.report_service.verify(payload.base_url()).await?;

    Ok(Json(records))
}
