mod common;

use link_verifier::application::services::LinkExtractor;
use link_verifier::domain::entities::LinkStatus;
use link_verifier::domain::gateways::{LinkProbe, PageFetcher};
use link_verifier::error::AppError;
use link_verifier::infrastructure::http::{HttpLinkProbe, HttpPageFetcher};
use std::time::Duration;

fn probe() -> HttpLinkProbe {
    HttpLinkProbe::new(Duration::from_secs(5), 10, "link-verifier-test").unwrap()
}

fn fetcher() -> HttpPageFetcher {
    HttpPageFetcher::new(Some(Duration::from_secs(5)), "link-verifier-test").unwrap()
}

#[tokio::test]
async fn test_probe_ok() {
    let base = common::spawn_fixture_site(common::MIXED_PAGE).await;

    let status = probe()
        .check_status(&format!("{base}/docs/report.pdf"))
        .await;

    assert_eq!(status, LinkStatus::Ok);
}

#[tokio::test]
async fn test_probe_not_found() {
    let base = common::spawn_fixture_site(common::MIXED_PAGE).await;

    let status = probe()
        .check_status(&format!("{base}/docs/missing.pdf"))
        .await;

    assert_eq!(status, LinkStatus::NotFound);
}

#[tokio::test]
async fn test_probe_server_error_is_unexpected() {
    let base = common::spawn_fixture_site(common::MIXED_PAGE).await;

    let status = probe()
        .check_status(&format!("{base}/img/broken.PNG"))
        .await;

    assert_eq!(status, LinkStatus::Unexpected(500));
}

#[tokio::test]
async fn test_probe_follows_redirects() {
    let base = common::spawn_fixture_site(common::MIXED_PAGE).await;

    let status = probe().check_status(&format!("{base}/img/moved.jpg")).await;

    assert_eq!(status, LinkStatus::Ok);
}

#[tokio::test]
async fn test_probe_redirect_loop_is_unreachable() {
    let base = common::spawn_fixture_site(common::MIXED_PAGE).await;

    let status = probe().check_status(&format!("{base}/loop.pdf")).await;

    assert_eq!(status, LinkStatus::Unreachable);
}

#[tokio::test]
async fn test_probe_redirects_disabled_reports_redirect_status() {
    let base = common::spawn_fixture_site(common::MIXED_PAGE).await;
    let probe = HttpLinkProbe::new(Duration::from_secs(5), 0, "link-verifier-test").unwrap();

    let status = probe.check_status(&format!("{base}/img/moved.jpg")).await;

    assert_eq!(status, LinkStatus::Unexpected(307));
}

#[tokio::test]
async fn test_check_status_timeout_is_unreachable() {
    let base = common::spawn_fixture_site(common::MIXED_PAGE).await;
    let probe =
        HttpLinkProbe::new(Duration::from_millis(200), 10, "link-verifier-test").unwrap();

    let status = probe.check_status(&format!("{base}/slow.pdf")).await;

    assert_eq!(status, LinkStatus::Unreachable);
    assert_eq!(status.to_string(), "Sem resposta");
}

#[tokio::test]
async fn test_probe_closed_port_is_unreachable() {
    let base = common::closed_port_url().await;

    let status = probe().check_status(&format!("{base}/a.pdf")).await;

    assert_eq!(status, LinkStatus::Unreachable);
}

#[tokio::test]
async fn test_probe_invalid_url_is_unreachable() {
    let status = probe().check_status("not a url/a.pdf").await;

    assert_eq!(status, LinkStatus::Unreachable);
}

#[tokio::test]
async fn test_fetch_page_returns_markup() {
    let base = common::spawn_fixture_site(common::MIXED_PAGE).await;

    let html = fetcher().fetch_page(&base).await.unwrap();

    assert!(html.contains("paginas-internas"));
}

#[tokio::test]
async fn test_fetch_page_decodes_declared_charset() {
    let base = common::spawn_fixture_site(common::MIXED_PAGE).await;

    let html = fetcher().fetch_page(&format!("{base}/latin1")).await.unwrap();
    let links = LinkExtractor::default().candidate_links(&html, &base);

    assert_eq!(links, vec![format!("{base}/docs/relatório.pdf")]);
}

#[tokio::test]
async fn test_fetch_page_error_status() {
    let base = common::spawn_fixture_site(common::MIXED_PAGE).await;

    let result = fetcher().fetch_page(&format!("{base}/missing")).await;

    assert!(matches!(result, Err(AppError::Fetch { .. })));
}

#[tokio::test]
async fn test_fetch_page_closed_port() {
    let base = common::closed_port_url().await;

    let result = fetcher().fetch_page(&base).await;

    assert!(matches!(result, Err(AppError::Fetch { .. })));
}

#[tokio::test]
async fn test_fetch_page_invalid_url() {
    let result = fetcher().fetch_page("site.gov.br").await;

    assert!(matches!(result, Err(AppError::Fetch { .. })));
}
