//! Authentication response DTOs

use serde::{Deserialize, Serialize};

use crate::models::{Admin, Role};

/// Role-bearing admin projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub admin_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<Admin> for AdminProfile {
    fn from(admin: Admin) -> Self {
        Self {
            admin_id: admin.admin_id,
            name: admin.name,
            email: admin.email,
            role: admin.role,
        }
    }
}

/// Sign-in success response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub success: bool,
    pub admin: AdminProfile,
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Current admin response (for /me endpoint)
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentAdminResponse {
    pub success: bool,
    pub admin: AdminProfile,
}
