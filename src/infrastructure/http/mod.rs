//! Outbound HTTP implementations of the domain gateways.
//!
//! Provides two `reqwest`-backed implementations:
//! - [`HttpPageFetcher`] - GET of the target page, no timeout unless configured
//! - [`HttpLinkProbe`] - HEAD liveness check with redirects and a fixed timeout

mod link_probe;
mod page_fetcher;

pub use link_probe::HttpLinkProbe;
pub use page_fetcher::HttpPageFetcher;
