//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `127.0.0.1:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PROBE_TIMEOUT_SECONDS` - Per-link HEAD timeout (default: 10)
//! - `FETCH_TIMEOUT_SECONDS` - Page fetch timeout (default: unset, no timeout)
//! - `MAX_REDIRECTS` - Redirects followed by a link probe (default: 10, max: 50)
//! - `CONTAINER_SELECTOR` - CSS selector of link regions (default: `div.paginas-internas`)
//! - `FILE_EXTENSIONS` - Comma-separated extensions (default: `.pdf,.png,.jpeg,.jpg`)
//! - `LINK_RESOLUTION` - `concat` or `join` (default: `concat`)
//! - `USER_AGENT` - User agent of outbound requests (default: `link-verifier/<version>`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::{DEFAULT_CONTAINER_SELECTOR, LinkExtractor};
use crate::utils::file_extension::{DEFAULT_FILE_EXTENSIONS, normalize_extensions};
use crate::utils::url_resolver::LinkResolution;

/// Default user agent sent with page fetches and probes.
pub const DEFAULT_USER_AGENT: &str = concat!("link-verifier/", env!("CARGO_PKG_VERSION"));

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Timeout of each link HEAD probe, redirects included.
    pub probe_timeout_seconds: u64,
    /// Timeout of the page fetch. `None` waits indefinitely.
    pub fetch_timeout_seconds: Option<u64>,
    pub max_redirects: usize,
    pub container_selector: String,
    /// Lowercased extensions, each starting with `.`.
    pub file_extensions: Vec<String>,
    pub link_resolution: LinkResolution,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            probe_timeout_seconds: 10,
            fetch_timeout_seconds: None,
            max_redirects: 10,
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            file_extensions: normalize_extensions(DEFAULT_FILE_EXTENSIONS),
            link_resolution: LinkResolution::Concat,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable or `LINK_RESOLUTION` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let probe_timeout_seconds =
            parse_var("PROBE_TIMEOUT_SECONDS")?.unwrap_or(defaults.probe_timeout_seconds);

        let fetch_timeout_seconds = parse_var("FETCH_TIMEOUT_SECONDS")?;

        let max_redirects = parse_var("MAX_REDIRECTS")?.unwrap_or(defaults.max_redirects);

        let container_selector =
            env::var("CONTAINER_SELECTOR").unwrap_or(defaults.container_selector);

        let file_extensions = env::var("FILE_EXTENSIONS")
            .map(|v| normalize_extensions(v.split(',')))
            .unwrap_or(defaults.file_extensions);

        let link_resolution = match env::var("LINK_RESOLUTION") {
            Ok(v) => v
                .parse::<LinkResolution>()
                .context("Invalid LINK_RESOLUTION")?,
            Err(_) => defaults.link_resolution,
        };

        let user_agent = env::var("USER_AGENT").unwrap_or(defaults.user_agent);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            probe_timeout_seconds,
            fetch_timeout_seconds,
            max_redirects,
            container_selector,
            file_extensions,
            link_resolution,
            user_agent,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - a timeout is zero or `max_redirects` exceeds 50
    /// - an extension does not start with `.`
    /// - the container selector is not valid CSS
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.probe_timeout_seconds == 0 {
            anyhow::bail!("PROBE_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.fetch_timeout_seconds == Some(0) {
            anyhow::bail!("FETCH_TIMEOUT_SECONDS must be greater than 0 when set");
        }

        if self.max_redirects > 50 {
            anyhow::bail!(
                "MAX_REDIRECTS must be at most 50, got {}",
                self.max_redirects
            );
        }

        if let Some(ext) = self.file_extensions.iter().find(|ext| !ext.starts_with('.')) {
            anyhow::bail!("FILE_EXTENSIONS entries must start with '.', got '{}'", ext);
        }

        self.link_extractor()?;

        Ok(())
    }

    /// Builds the link extractor described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the container selector is invalid or no extension is configured.
    pub fn link_extractor(&self) -> Result<LinkExtractor> {
        LinkExtractor::new(
            &self.container_selector,
            &self.file_extensions,
            self.link_resolution,
        )
        .context("Invalid link extraction settings")
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_seconds)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_seconds.map(Duration::from_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Probe timeout: {}s", self.probe_timeout_seconds);
        match self.fetch_timeout_seconds {
            Some(secs) => tracing::info!("  Fetch timeout: {}s", secs),
            None => tracing::info!("  Fetch timeout: none"),
        }
        tracing::info!("  Max redirects: {}", self.max_redirects);
        tracing::info!("  Container selector: {}", self.container_selector);
        tracing::info!("  File extensions: {}", self.file_extensions.join(","));
        tracing::info!("  Link resolution: {}", self.link_resolution.as_str());
    }
}

/// Parses an optional numeric environment variable.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
