//! Application layer services implementing the verification pipeline.
//!
//! This layer orchestrates domain operations by coordinating the gateway
//! traits, link extraction and report serialization. Services consume
//! gateway traits and provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::link_extractor::LinkExtractor`] - Container/extension filtering and URL resolution
//! - [`services::report_service::ReportService`] - Fetch, verify and export orchestration

pub mod services;
