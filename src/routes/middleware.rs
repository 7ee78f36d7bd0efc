use crate::shared::utils::logger::LogContext;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Log method, path, status and latency of every request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    LogContext::http_request(
        method.as_str(),
        &path,
        response.status().as_u16(),
        start.elapsed().as_millis() as u64,
    );
    response
}
