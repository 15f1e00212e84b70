//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod admin;
pub mod user;

pub use admin::*;
pub use user::*;
