//! Gateway trait for link liveness checks.

use crate::domain::entities::LinkStatus;
use async_trait::async_trait;

/// Performs a lightweight existence check against a URL.
///
/// Probes are independent: no retry, no caching, no shared state between
/// calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpLinkProbe`] - `reqwest` HEAD implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkProbe: Send + Sync {
    /// Probes `url` and classifies the final response.
    ///
    /// Never fails: transport errors and timeouts are reported as
    /// [`LinkStatus::Unreachable`].
    async fn check_status(&self, url: &str) -> LinkStatus;
}
