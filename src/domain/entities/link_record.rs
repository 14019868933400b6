//! Link record entity representing one verified file link.

use serde::{Deserialize, Serialize};

use super::LinkStatus;

/// A discovered file link with its display status.
///
/// Serialized as `{"URL": ..., "Status": ...}`, which is also the shape the
/// export endpoint accepts back. `status` is a free-form label so records
/// produced elsewhere can still be exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "Status")]
    pub status: String,
}

impl LinkRecord {
    /// Creates a new LinkRecord instance.
    pub fn new(url: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: status.into(),
        }
    }

    /// Creates a record from a probe classification.
    pub fn from_status(url: impl Into<String>, status: LinkStatus) -> Self {
        Self::new(url, status.to_string())
    }
}
