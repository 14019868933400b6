//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request (method, URI, version) and logs the
/// response status with its latency in milliseconds. Server errors, such as
/// a failed page fetch on `/check-urls`, are additionally logged at `WARN`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/check-urls version=HTTP/1.1}: finished processing request latency=843 ms status=200
/// WARN request{method=POST uri=/check-urls version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=12 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
