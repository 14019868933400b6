//! DTOs for the link verification endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to verify the file links of a page.
///
/// A missing or `null` `base_url` deserializes to `None` and is rejected
/// by the service with the same message as an empty one.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckUrlsRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Base URL não fornecida"))]
    pub base_url: Option<String>,
}

impl CheckUrlsRequest {
    /// Base URL to verify; empty when absent.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_default()
    }
}
