//! Gateway trait for retrieving page markup.

use crate::error::AppError;
use async_trait::async_trait;

/// Retrieves the raw markup of a web page.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPageFetcher`] - `reqwest` GET implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the response body as text.
    ///
    /// No validation is applied to `url`; malformed URLs fail in the transport.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Fetch`] on transport failure or when the final
    /// response status is a client or server error.
    async fn fetch_page(&self, url: &str) -> Result<String, AppError>;
}
