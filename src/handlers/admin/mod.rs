//! Admin management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(handler::create_admin))
        .route("/admins", get(handler::list_admins))
        .route("/admins/{admin_id}", delete(handler::delete_admin))
}
