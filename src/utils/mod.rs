//! Utility functions

pub mod validation;

pub use validation::{is_missing, validate_password_length, PASSWORD_TOO_SHORT};
