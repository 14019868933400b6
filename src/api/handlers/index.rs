//! Handler for the liveness banner.

/// Banner returned by `GET /`.
pub const INDEX_MESSAGE: &str = "API para verificação de URLs está funcionando.";

/// Returns a plain-text liveness string.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> &'static str {
    INDEX_MESSAGE
}
