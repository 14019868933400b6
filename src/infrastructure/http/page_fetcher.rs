//! `reqwest`-backed page fetcher.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::gateways::PageFetcher;
use crate::error::AppError;

/// Fetches page markup with a plain GET request.
///
/// The body is decoded with the charset declared in `Content-Type`, UTF-8
/// when none is given. Redirects are followed with the `reqwest` default
/// policy. When no timeout is configured a request to an unresponsive server
/// can block indefinitely.
#[derive(Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// Builds the fetcher.
    ///
    /// # Arguments
    ///
    /// - `timeout` - Optional total request timeout (`FETCH_TIMEOUT_SECONDS`)
    /// - `user_agent` - Value of the `User-Agent` header
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> reqwest::Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent.to_string());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, AppError> {
        debug!("Fetching page {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                warn!("Failed to fetch {}: {}", url, e);
                AppError::fetch(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read body of {}: {}", url, e);
            AppError::fetch(e.to_string())
        })?;

        debug!("Fetched {} ({}, {} bytes)", url, status, body.len());

        Ok(body)
    }
}
