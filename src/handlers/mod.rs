//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Everything except `/health` and `/auth/signin` requires a bearer token.

pub mod admin;
pub mod auth;
pub mod health;
pub mod users;

use axum::{middleware, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    let require_auth = middleware::from_fn_with_state(state, auth_middleware);

    Router::new()
        .merge(health::routes())
        .nest(
            "/auth",
            auth::routes().merge(
                auth::protected_routes()
                    .merge(admin::routes())
                    .route_layer(require_auth.clone()),
            ),
        )
        .nest("/users", users::routes().route_layer(require_auth))
}
