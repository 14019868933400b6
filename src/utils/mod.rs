//! Utility functions for link filtering and resolution.
//!
//! - [`file_extension`] - Case-insensitive extension filter for hrefs
//! - [`url_resolver`] - Turning extracted hrefs into absolute URLs

pub mod file_extension;
pub mod url_resolver;
