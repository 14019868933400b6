//! Core domain entities.
//!
//! - [`LinkRecord`] - A discovered file link and its display status
//! - [`LinkStatus`] - Classification of a single liveness probe

pub mod link_record;
pub mod link_status;

pub use link_record::LinkRecord;
pub use link_status::LinkStatus;
