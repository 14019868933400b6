//! Business logic services for the application layer.

pub mod link_extractor;
pub mod report_service;

pub use link_extractor::{DEFAULT_CONTAINER_SELECTOR, ExtractorError, LinkExtractor};
pub use report_service::{MISSING_BASE_URL, NO_RECORDS_TO_EXPORT, ReportService};
