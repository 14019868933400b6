//! Shared application state injected into handlers.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::services::ReportService;
use crate::config::Config;
use crate::infrastructure::http::{HttpLinkProbe, HttpPageFetcher};

/// Report service wired to the real HTTP gateways.
pub type HttpReportService = ReportService<HttpPageFetcher, HttpLinkProbe>;

#[derive(Clone)]
pub struct AppState {
    pub report_service: Arc<HttpReportService>,
}

impl AppState {
    pub fn new(report_service: Arc<HttpReportService>) -> Self {
        Self { report_service }
    }

    /// Builds the HTTP clients and services described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the extraction settings are invalid or an HTTP
    /// client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Arc::new(build_report_service(config)?)))
    }
}

/// Builds a [`HttpReportService`] from configuration.
///
/// Shared by the HTTP server and the `linkcheck` command.
///
/// # Errors
///
/// See [`AppState::from_config`].
pub fn build_report_service(config: &Config) -> Result<HttpReportService> {
    let extractor = config.link_extractor()?;

    let fetcher = HttpPageFetcher::new(config.fetch_timeout(), &config.user_agent)
        .context("Failed to build page fetch client")?;

    let probe = HttpLinkProbe::new(
        config.probe_timeout(),
        config.max_redirects,
        &config.user_agent,
    )
    .context("Failed to build link probe client")?;

    Ok(ReportService::new(
        Arc::new(fetcher),
        Arc::new(probe),
        extractor,
    ))
}
