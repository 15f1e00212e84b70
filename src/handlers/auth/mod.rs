//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Public authentication routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/signin", post(handler::sign_in))
}

/// Authentication routes that need a bearer token
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/me", get(handler::get_current_admin))
}
