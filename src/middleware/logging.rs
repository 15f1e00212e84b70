//! Request logging middleware

use std::time::Instant;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{info, warn};

/// Log one line per request, with access refusals called out separately
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = format!("{:.2}", started.elapsed().as_secs_f64() * 1000.0);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            warn!(%method, %path, status = status.as_u16(), %elapsed_ms, "Access refused");
        }
        s if s.is_server_error() => {
            warn!(%method, %path, status = s.as_u16(), %elapsed_ms, "Request failed");
        }
        s if s.is_client_error() && s != StatusCode::NOT_FOUND => {
            warn!(%method, %path, status = s.as_u16(), %elapsed_ms, "Request rejected");
        }
        s => {
            info!(%method, %path, status = s.as_u16(), %elapsed_ms, "Request completed");
        }
    }

    response
}
