//! `reqwest`-backed link liveness probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, redirect::Policy};
use tracing::{debug, warn};

use crate::domain::entities::LinkStatus;
use crate::domain::gateways::LinkProbe;

/// Probes links with a HEAD request.
///
/// Redirects are followed up to the configured limit and the final status is
/// classified with [`LinkStatus::from_status_code`]. Every failure to obtain
/// a status (connect error, timeout, redirect loop, invalid URL) is absorbed
/// and reported as [`LinkStatus::Unreachable`].
#[derive(Clone)]
pub struct HttpLinkProbe {
    client: Client,
}

impl HttpLinkProbe {
    /// Builds the probe.
    ///
    /// # Arguments
    ///
    /// - `timeout` - Total time allowed per probe, redirects included
    /// - `max_redirects` - Redirect hops followed before giving up; `0`
    ///   disables redirects so the 3xx status itself is classified
    /// - `user_agent` - Value of the `User-Agent` header
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration, max_redirects: usize, user_agent: &str) -> reqwest::Result<Self> {
        let policy = match max_redirects {
            0 => Policy::none(),
            n => Policy::limited(n),
        };

        let client = Client::builder()
            .timeout(timeout)
            .redirect(policy)
            .user_agent(user_agent.to_string())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl LinkProbe for HttpLinkProbe {
    async fn check_status(&self, url: &str) -> LinkStatus {
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = LinkStatus::from_status_code(response.status().as_u16());
                debug!("HEAD {} -> {} ({})", url, response.status(), status);
                status
            }
            Err(e) => {
                let reason = if e.is_timeout() {
                    "timed out"
                } else if e.is_redirect() {
                    "too many redirects"
                } else if e.is_connect() {
                    "connection failed"
                } else {
                    "request failed"
                };
                warn!("HEAD {} {}: {}", url, reason, e);
                LinkStatus::Unreachable
            }
        }
    }
}
