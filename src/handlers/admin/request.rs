//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MIN_PASSWORD_LENGTH;

/// Create admin request.
///
/// `role` is accepted for compatibility but the account is always a moderator.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    #[validate(
        required(message = "All fields are required"),
        length(min = 1, message = "All fields are required")
    )]
    pub admin_id: Option<String>,

    #[validate(
        required(message = "All fields are required"),
        length(min = 1, message = "All fields are required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "All fields are required"),
        length(min = 1, message = "All fields are required")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "All fields are required"),
        length(min = MIN_PASSWORD_LENGTH, message = "Password must be at least 6 characters")
    )]
    pub password: Option<String>,

    pub role: Option<String>,
}
