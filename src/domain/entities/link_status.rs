//! Liveness probe classification.

use std::fmt;

/// Outcome of probing a single link.
///
/// Rendered through [`fmt::Display`] into the user-facing labels stored in
/// [`super::LinkRecord::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// Final status in the 2xx range.
    Ok,
    /// Final status was exactly 404.
    NotFound,
    /// Any other final status code.
    Unexpected(u16),
    /// Transport failure, timeout or redirect loop; no status available.
    Unreachable,
}

impl LinkStatus {
    /// Classifies the final HTTP status code of a probe.
    pub fn from_status_code(code: u16) -> Self {
        match code {
            200..=299 => LinkStatus::Ok,
            404 => LinkStatus::NotFound,
            other => LinkStatus::Unexpected(other),
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Ok => write!(f, "OK"),
            LinkStatus::NotFound => write!(f, "Erro 404"),
            LinkStatus::Unexpected(code) => write!(f, "Status inesperado: {}", code),
            LinkStatus::Unreachable => write!(f, "Sem resposta"),
        }
    }
}
