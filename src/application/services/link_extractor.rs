//! Extraction of file links from a page region.

use scraper::{Html, Selector};
use tracing::debug;

use crate::domain::entities::LinkRecord;
use crate::domain::gateways::LinkProbe;
use crate::utils::file_extension::{
    DEFAULT_FILE_EXTENSIONS, has_file_extension, normalize_extensions,
};
use crate::utils::url_resolver::{LinkResolution, resolve_href};

/// Container of the "internal pages" region on the target site.
pub const DEFAULT_CONTAINER_SELECTOR: &str = "div.paginas-internas";

const ANCHOR_SELECTOR: &str = "a";

/// Errors raised while building an extractor.
#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("Invalid container selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("At least one file extension is required")]
    NoExtensions,
}

/// Locates file links inside the configured containers of a page.
///
/// # Extraction Rules
///
/// 1. Every element matching the container selector, in document order
/// 2. Every `<a>` descendant of that container, in document order
/// 3. The `href` (missing reads as empty) must end with a configured
///    extension, ignoring case
/// 4. The href is resolved against the base URL with the configured
///    [`LinkResolution`]
///
/// Nested matching containers are each walked, so their shared anchors are
/// reported once per container.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    container: Selector,
    anchor: Selector,
    extensions: Vec<String>,
    resolution: LinkResolution,
}

impl LinkExtractor {
    /// Creates a new extractor.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::InvalidSelector`] if `container_selector` is
    /// not a valid CSS selector, [`ExtractorError::NoExtensions`] if
    /// `extensions` is empty after normalization.
    pub fn new<S: AsRef<str>>(
        container_selector: &str,
        extensions: &[S],
        resolution: LinkResolution,
    ) -> Result<Self, ExtractorError> {
        let container =
            Selector::parse(container_selector).map_err(|e| ExtractorError::InvalidSelector {
                selector: container_selector.to_string(),
                reason: e.to_string(),
            })?;
        let anchor =
            Selector::parse(ANCHOR_SELECTOR).map_err(|e| ExtractorError::InvalidSelector {
                selector: ANCHOR_SELECTOR.to_string(),
                reason: e.to_string(),
            })?;

        let extensions = normalize_extensions(extensions);
        if extensions.is_empty() {
            return Err(ExtractorError::NoExtensions);
        }

        Ok(Self {
            container,
            anchor,
            extensions,
            resolution,
        })
    }

    /// Returns the absolute URLs of all qualifying links, in output order.
    ///
    /// Parsing is lenient: malformed markup never fails, it simply yields
    /// fewer (or no) links.
    pub fn candidate_links(&self, html: &str, base_url: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let mut links = Vec::new();

        for container in document.select(&self.container) {
            for anchor in container.select(&self.anchor) {
                let href = anchor.value().attr("href").unwrap_or("");

                if !has_file_extension(href, &self.extensions) {
                    continue;
                }

                links.push(resolve_href(base_url, href, self.resolution));
            }
        }

        links
    }

    /// Extracts qualifying links and probes each one, sequentially.
    ///
    /// The whole result is materialized before returning; probes run one at
    /// a time in output order.
    pub async fn extract_links<P>(&self, html: &str, base_url: &str, probe: &P) -> Vec<LinkRecord>
    where
        P: LinkProbe + ?Sized,
    {
        let candidates = self.candidate_links(html, base_url);
        debug!("Found {} candidate links on {}", candidates.len(), base_url);

        let mut records = Vec::with_capacity(candidates.len());
        for url in candidates {
            let status = probe.check_status(&url).await;
            records.push(LinkRecord::from_status(url, status));
        }

        records
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new(
            DEFAULT_CONTAINER_SELECTOR,
            &DEFAULT_FILE_EXTENSIONS,
            LinkResolution::default(),
        )
        .expect("default extractor settings are valid")
    }
}
