//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{auth_middleware, require_capability, AuthenticatedAdmin};
pub use logging::logging_middleware;
