//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod check_urls;
pub mod download_excel;
pub mod health;
pub mod index;

pub use check_urls::check_urls_handler;
pub use download_excel::download_excel_handler;
pub use health::health_handler;
pub use index::index_handler;
