//! User management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_users).post(handler::create_user))
        .route("/{user_id}", delete(handler::delete_user))
}
