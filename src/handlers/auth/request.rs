//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

/// Admin sign-in request
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(
        required(message = "Email and password are required"),
        length(min = 1, message = "Email and password are required")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Email and password are required"),
        length(min = 1, message = "Email and password are required")
    )]
    pub password: Option<String>,
}
