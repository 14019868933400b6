//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for outbound HTTP and report serialization.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` implementations of the page fetcher and link probe
//! - [`spreadsheet`] - XLSX rendering of link records

pub mod http;
pub mod spreadsheet;
