//! Gateway trait definitions for the domain layer.
//!
//! These traits abstract the two outbound network operations of a
//! verification request so the extraction and orchestration logic can be
//! exercised without a network.
//!
//! # Architecture
//!
//! - Traits define the contract for outbound calls
//! - Implementations live in `crate::infrastructure::http`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Gateways
//!
//! - [`PageFetcher`] - Retrieves the raw markup of the target page
//! - [`LinkProbe`] - Point-in-time liveness check of a single link

pub mod link_probe;
pub mod page_fetcher;

pub use link_probe::LinkProbe;
pub use page_fetcher::PageFetcher;

#[cfg(test)]
pub use link_probe::MockLinkProbe;
#[cfg(test)]
pub use page_fetcher::MockPageFetcher;
