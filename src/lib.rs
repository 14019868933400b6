//! # Link Verifier
//!
//! A small HTTP service that reads a web page, extracts the document and
//! image links found in its content region, probes each link and reports
//! their status. Reports can be exported as XLSX spreadsheets.
//!
//! ## Architecture
//!
//! The crate keeps a layered layout:
//!
//! - **Domain Layer** ([`domain`]) - Link records, status classification and gateway traits
//! - **Application Layer** ([`application`]) - Link extraction and report orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` gateways and XLSX rendering
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Pipeline
//!
//! 1. `POST /check-urls` carries a base URL
//! 2. The page is fetched once ([`domain::gateways::PageFetcher`])
//! 3. Links inside `div.paginas-internas` ending in `.pdf`, `.png`, `.jpeg`
//!    or `.jpg` are resolved against the base URL
//! 4. Each link is probed with a HEAD request, one at a time
//!    ([`domain::gateways::LinkProbe`])
//! 5. The records come back as `[{"URL": ..., "Status": ...}]`, and
//!    `POST /download-excel` turns them into `url_status.xlsx`
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service on 127.0.0.1:5000
//! cargo run
//!
//! # Verify a page
//! curl -X POST localhost:5000/check-urls \
//!      -H 'Content-Type: application/json' \
//!      -d '{"base_url": "https://example.gov.br"}'
//!
//! # Or from the terminal
//! cargo run --bin linkcheck -- https://example.gov.br --output report.xlsx
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkExtractor, ReportService};
    pub use crate::config::Config;
    pub use crate::domain::entities::{LinkRecord, LinkStatus};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
