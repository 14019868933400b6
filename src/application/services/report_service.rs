//! Link verification and export service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::services::link_extractor::LinkExtractor;
use crate::domain::entities::{LinkRecord, LinkStatus};
use crate::domain::gateways::{LinkProbe, PageFetcher};
use crate::error::AppError;
use crate::infrastructure::spreadsheet::render_xlsx;

/// Message returned when a verification request carries no base URL.
pub const MISSING_BASE_URL: &str = "Base URL não fornecida";

/// Message returned when an export request carries no records.
pub const NO_RECORDS_TO_EXPORT: &str = "Nenhum dado disponível para exportar";

/// Service orchestrating page retrieval, link extraction and export.
///
/// Holds no per-request state; every call builds and returns its own
/// records.
pub struct ReportService<F: PageFetcher, P: LinkProbe> {
    fetcher: Arc<F>,
    probe: Arc<P>,
    extractor: LinkExtractor,
}

impl<F: PageFetcher, P: LinkProbe> ReportService<F, P> {
    /// Creates a new report service.
    pub fn new(fetcher: Arc<F>, probe: Arc<P>, extractor: LinkExtractor) -> Self {
        Self {
            fetcher,
            probe,
            extractor,
        }
    }

    /// Fetches `base_url` and verifies every qualifying file link on it.
    ///
    /// # Flow
    ///
    /// 1. Reject an empty base URL before any network access
    /// 2. Fetch the page (single attempt, no retry)
    /// 3. Extract candidate links and probe them one by one
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `base_url` is empty.
    /// Returns [`AppError::Fetch`] if the page cannot be retrieved; no
    /// partial result is produced in that case.
    pub async fn verify(&self, base_url: &str) -> Result<Vec<LinkRecord>, AppError> {
        if base_url.is_empty() {
            return Err(AppError::bad_request(MISSING_BASE_URL));
        }

        info!("Verifying links on {}", base_url);

        let html = self.fetcher.fetch_page(base_url).await.inspect_err(|e| {
            warn!("Page fetch failed for {}: {}", base_url, e);
        })?;

        let records = self
            .extractor
            .extract_links(&html, base_url, self.probe.as_ref())
            .await;

        let ok_label = LinkStatus::Ok.to_string();
        let ok = records.iter().filter(|r| r.status == ok_label).count();
        info!(
            "Verified {} links on {}: {} ok, {} failing",
            records.len(),
            base_url,
            ok,
            records.len() - ok
        );

        Ok(records)
    }

    /// Renders records as an XLSX workbook.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `records` is empty.
    /// Returns [`AppError::Internal`] if the workbook cannot be written.
    pub fn export_to_spreadsheet(&self, records: &[LinkRecord]) -> Result<Vec<u8>, AppError> {
        if records.is_empty() {
            return Err(AppError::bad_request(NO_RECORDS_TO_EXPORT));
        }

        let bytes = render_xlsx(records).map_err(|e| {
            warn!("Spreadsheet export failed: {}", e);
            AppError::internal(format!("Failed to build spreadsheet: {}", e))
        })?;

        info!(
            "Exported {} records to spreadsheet ({} bytes)",
            records.len(),
            bytes.len()
        );

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::{MockLinkProbe, MockPageFetcher};

    const BASE: &str = "https://site.gov.br";

    const PAGE: &str = r#"
        <html><body>
            <div class="paginas-internas">
                <a href="/docs/report.pdf">Report</a>
                <a href="/about.html">About</a>
            </div>
        </body></html>
    "#;

    fn service(
        fetcher: MockPageFetcher,
        probe: MockLinkProbe,
    ) -> ReportService<MockPageFetcher, MockLinkProbe> {
        ReportService::new(Arc::new(fetcher), Arc::new(probe), LinkExtractor::default())
    }

    fn page_fetcher(html: &'static str) -> MockPageFetcher {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch_page()
            .withf(|url| url == BASE)
            .times(1)
            .returning(move |_| Ok(html.to_string()));
        fetcher
    }

    #[tokio::test]
    async fn test_verify_reports_ok_link() {
        let mut probe = MockLinkProbe::new();
        probe
            .expect_check_status()
            .withf(|url| url == "https://site.gov.br/docs/report.pdf")
            .times(1)
            .returning(|_| LinkStatus::Ok);

        let records = service(page_fetcher(PAGE), probe)
            .verify(BASE)
            .await
            .unwrap();

        assert_eq!(
            records,
            vec![LinkRecord::new("https://site.gov.br/docs/report.pdf", "OK")]
        );
    }

    #[tokio::test]
    async fn test_verify_reports_not_found_link() {
        let mut probe = MockLinkProbe::new();
        probe
            .expect_check_status()
            .times(1)
            .returning(|_| LinkStatus::NotFound);

        let records = service(page_fetcher(PAGE), probe)
            .verify(BASE)
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, "Erro 404");
    }

    #[tokio::test]
    async fn test_verify_reports_unexpected_status() {
        let mut probe = MockLinkProbe::new();
        probe
            .expect_check_status()
            .times(1)
            .returning(|_| LinkStatus::Unexpected(503));

        let records = service(page_fetcher(PAGE), probe)
            .verify(BASE)
            .await
            .unwrap();

        assert_eq!(records[0].status, "Status inesperado: 503");
    }

    #[tokio::test]
    async fn test_verify_empty_base_url_skips_network() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch_page().times(0);
        let mut probe = MockLinkProbe::new();
        probe.expect_check_status().times(0);

        let result = service(fetcher, probe).verify("").await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), MISSING_BASE_URL);
    }

    #[tokio::test]
    async fn test_verify_propagates_fetch_error() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch_page()
            .times(1)
            .returning(|_| Err(AppError::fetch("connection refused")));
        let mut probe = MockLinkProbe::new();
        probe.expect_check_status().times(0);

        let result = service(fetcher, probe).verify(BASE).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Fetch { .. }));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn test_verify_page_without_container() {
        let mut probe = MockLinkProbe::new();
        probe.expect_check_status().times(0);

        let fetcher = page_fetcher(r#"<html><body><a href="/a.pdf">A</a></body></html>"#);
        let records = service(fetcher, probe)
            .verify(BASE)
            .await
            .unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_verify_is_repeatable() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch_page()
            .times(2)
            .returning(|_| Ok(PAGE.to_string()));
        let mut probe = MockLinkProbe::new();
        probe
            .expect_check_status()
            .times(2)
            .returning(|_| LinkStatus::Ok);

        let service = service(fetcher, probe);
        let first = service.verify(BASE).await.unwrap();
        let second = service.verify(BASE).await.unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_export_rejects_empty_records() {
        let service = service(MockPageFetcher::new(), MockLinkProbe::new());

        let err = service.export_to_spreadsheet(&[]).unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), NO_RECORDS_TO_EXPORT);
    }

    #[test]
    fn test_export_renders_workbook() {
        let service = service(MockPageFetcher::new(), MockLinkProbe::new());
        let records = vec![LinkRecord::new("https://site.gov.br/a.pdf", "OK")];

        let bytes = service.export_to_spreadsheet(&records).unwrap();

        assert!(bytes.starts_with(b"PK"));
    }
}
