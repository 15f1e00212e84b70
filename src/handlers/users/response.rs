//! User response DTOs

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Created user response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub success: bool,
    pub user: User,
}
