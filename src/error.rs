//! Application error type and its HTTP rendering.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced to API callers.
///
/// Every variant renders as `{"error": "<message>"}`:
///
/// - [`AppError::Validation`] - unreadable body, missing or empty input field (400)
/// - [`AppError::Fetch`] - the target page could not be retrieved (500)
/// - [`AppError::Internal`] - unexpected failure, e.g. the spreadsheet writer (500)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Fetch { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Fetch { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Uses the first field message declared on the DTO.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}

/// Bodies that are not JSON or do not match the DTO.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}
