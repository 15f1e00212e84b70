//! User request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(
        required(message = "User ID, name, and email are required"),
        length(min = 1, message = "User ID, name, and email are required")
    )]
    pub user_id: Option<String>,

    #[validate(
        required(message = "User ID, name, and email are required"),
        length(min = 1, message = "User ID, name, and email are required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "User ID, name, and email are required"),
        length(min = 1, message = "User ID, name, and email are required")
    )]
    pub email: Option<String>,
}
