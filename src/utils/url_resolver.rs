//! Resolution of extracted hrefs into absolute URLs.
//!
//! Two strategies are available:
//!
//! - [`LinkResolution::Concat`] glues the href onto the base URL verbatim,
//!   the historical behaviour of the report. `https://site.com/page` plus
//!   `/a.pdf` gives `https://site.com/page/a.pdf`.
//! - [`LinkResolution::Join`] applies RFC 3986 reference resolution, giving
//!   `https://site.com/a.pdf` for the same input.
//!
//! In both modes an href starting with `http` is taken as already absolute.

use std::str::FromStr;
use url::Url;

/// Errors that can occur while parsing a resolution strategy name.
#[derive(Debug, thiserror::Error)]
pub enum LinkResolutionError {
    #[error("Unknown link resolution '{0}', expected 'concat' or 'join'")]
    Unknown(String),
}

/// Strategy used to turn a relative href into an absolute URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkResolution {
    /// `base_url + href`, no separator insertion and no normalization.
    #[default]
    Concat,
    /// Standard URL joining against the base URL.
    Join,
}

impl LinkResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkResolution::Concat => "concat",
            LinkResolution::Join => "join",
        }
    }
}

impl FromStr for LinkResolution {
    type Err = LinkResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concat" => Ok(LinkResolution::Concat),
            "join" => Ok(LinkResolution::Join),
            other => Err(LinkResolutionError::Unknown(other.to_string())),
        }
    }
}

/// Resolves `href` against `base_url`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     resolve_href("https://site.com", "/docs/a.pdf", LinkResolution::Concat),
///     "https://site.com/docs/a.pdf"
/// );
///
/// assert_eq!(
///     resolve_href("https://site.com/page", "https://cdn.com/a.pdf", LinkResolution::Concat),
///     "https://cdn.com/a.pdf"
/// );
/// ```
pub fn resolve_href(base_url: &str, href: &str, resolution: LinkResolution) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }

    match resolution {
        LinkResolution::Concat => concat(base_url, href),
        LinkResolution::Join => match Url::parse(base_url).and_then(|base| base.join(href)) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::debug!(
                    "Cannot join '{}' onto '{}' ({}), concatenating instead",
                    href,
                    base_url,
                    e
                );
                concat(base_url, href)
            }
        },
    }
}

fn concat(base_url: &str, href: &str) -> String {
    format!("{}{}", base_url, href)
}
