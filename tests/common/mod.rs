#![allow(dead_code)]

use axum::{
    Router,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use link_verifier::config::Config;
use link_verifier::state::AppState;
use std::net::SocketAddr;
use std::time::Duration;

/// ISO-8859-1 page whose only link is `/docs/relatório.pdf`.
pub const LATIN1_PAGE: &[u8] =
    b"<html><body><div class=\"paginas-internas\"><a href=\"/docs/relat\xF3rio.pdf\">Relat\xF3rio</a></div></body></html>";

/// Page with one container holding every kind of fixture link.
pub const MIXED_PAGE: &str = r#"
<html>
  <body>
    <div class="menu"><a href="/menu.pdf">Menu</a></div>
    <div class="paginas-internas">
      <a href="/docs/report.pdf">Report</a>
      <a href="/docs/missing.pdf">Missing</a>
      <a href="/about.html">About</a>
      <a href="/img/broken.PNG">Broken</a>
      <a href="/img/moved.jpg">Moved</a>
    </div>
  </body>
</html>
"#;

pub const NO_CONTAINER_PAGE: &str = r#"
<html><body><a href="/docs/report.pdf">Report</a></body></html>
"#;

/// Starts a local site serving `page` at `/` and the fixture files.
///
/// Files:
/// - `/docs/report.pdf` - 200
/// - `/img/broken.PNG`  - 500
/// - `/img/moved.jpg`   - 307 to `/docs/report.pdf`
/// - `/loop.pdf`        - redirects to itself
/// - `/slow.pdf`        - 200 after two seconds
/// - `/latin1`          - [`LATIN1_PAGE`] served as `charset=iso-8859-1`
/// - `/missing`         - 404
/// - anything else      - 404
///
/// Returns the base URL, e.g. `http://127.0.0.1:41234`.
pub async fn spawn_fixture_site(page: impl Into<String>) -> String {
    let page: String = page.into();
    let app = Router::new()
        .route(
            "/",
            get(move || {
                let page = page.clone();
                async move { Html(page) }
            }),
        )
        .route(
            "/docs/report.pdf",
            get(|| async { ([(header::CONTENT_TYPE, "application/pdf")], "%PDF-1.4") }),
        )
        .route(
            "/img/broken.PNG",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
        )
        .route(
            "/img/moved.jpg",
            get(|| async { Redirect::temporary("/docs/report.pdf") }),
        )
        .route(
            "/loop.pdf",
            get(|| async { Redirect::temporary("/loop.pdf") }),
        )
        .route(
            "/slow.pdf",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                StatusCode::OK
            }),
        )
        .route(
            "/latin1",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/html; charset=iso-8859-1")],
                    LATIN1_PAGE,
                )
            }),
        )
        .route(
            "/missing",
            get(|| async { StatusCode::NOT_FOUND.into_response() }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Base URL of a port that is not listening.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}

pub fn test_config() -> Config {
    Config {
        probe_timeout_seconds: 5,
        fetch_timeout_seconds: Some(5),
        ..Config::default()
    }
}

pub fn create_test_state() -> AppState {
    AppState::from_config(&test_config()).unwrap()
}
