//! Edstock - Inventory Management Admin API
//!
//! This library provides the server and dashboard logic for the Edstock
//! inventory admin application.
//!
//! # Features
//!
//! - Email/password sign-in issuing JWT bearer tokens
//! - Two roles (super admin, moderator) enforced on every endpoint
//! - Moderator and user management with a last-super-admin guard
//! - Dashboard session state, route guard and navigation derived from role
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access (Postgres or in-memory)
//! - **Models**: Domain models and DTOs
//! - **Client**: Dashboard-side session, routing and API bindings

pub mod client;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use std::time::Duration;

use axum::{
    http::{HeaderValue, StatusCode},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router with all middleware applied
pub fn create_router(state: AppState) -> Router {
    let server = &state.config().server;
    let timeout_secs = server.request_timeout_secs;

    let allow_origin = match server.cors_allow_origin.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(_)) => {
            tracing::warn!("CORS_ALLOW_ORIGIN is not a valid header value, allowing any origin");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    Router::new()
        .merge(handlers::routes(state.clone()))
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(request_timeout_layer(timeout_secs))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(allow_origin)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Answer 408 when a request outlives the configured timeout
fn request_timeout_layer(secs: u64) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(secs))
}
