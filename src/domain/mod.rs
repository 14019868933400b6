//! Domain layer containing the report entities and the outbound contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Link records and their status classification
//! - [`gateways`] - Traits for the page fetcher and the link probe
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Extraction and orchestration live in [`crate::application::services`]

pub mod entities;
pub mod gateways;
