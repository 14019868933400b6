//! Handler for the spreadsheet export endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::export::ExportRequest;
use crate::error::AppError;
use crate::infrastructure::spreadsheet::{XLSX_CONTENT_TYPE, XLSX_FILENAME};
use crate::state::AppState;

/// Renders previously returned records as a downloadable XLSX file.
///
/// # Endpoint
///
/// `POST /download-excel`
///
/// # Request Body
///
/// ```json
/// {
///   "records": [
///     { "URL": "https://site.gov.br/docs/report.pdf", "Status": "OK" }
///   ]
/// }
/// ```
///
/// # Response
///
/// Binary workbook with a single `URLs` sheet, sent as the attachment
/// `url_status.xlsx`.
///
/// # Errors
///
/// - **400 Bad Request**: body is not valid JSON, a record lacks `URL` or
///   `Status`, or `records` is missing or empty
/// - **500 Internal Server Error**: the workbook could not be written
pub async fn download_excel_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let bytes = state.report_service.export_to_spreadsheet(&payload.records)?;

    let disposition = format!("attachment; filename=\"{}\"", XLSX_FILENAME);

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
