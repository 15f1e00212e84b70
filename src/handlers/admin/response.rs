//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    handlers::auth::AdminProfile,
    models::{Admin, Role},
};

/// Created admin response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAdminResponse {
    pub success: bool,
    pub admin: AdminProfile,
}

/// Admin listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub admin_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<Admin> for AdminSummary {
    fn from(admin: Admin) -> Self {
        Self {
            admin_id: admin.admin_id,
            name: admin.name,
            email: admin.email,
            role: admin.role,
            created_at: admin.created_at,
        }
    }
}

/// Generic success message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
