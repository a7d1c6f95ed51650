//! Cross-cutting request middleware.
//!
//! Per-request tracing: each request runs inside an `http.request` span and
//! emits one completion event carrying status and latency. Subscriber setup
//! happens once at process start, not here.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

pub async fn trace_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let span = tracing::info_span!("http.request", %method, path = %path);
    let response = next.run(request).instrument(span).await;

    tracing::info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );
    response
}
