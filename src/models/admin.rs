//! Admin model and role definitions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Administrator role.
///
/// Permissions are strictly ordered: a super admin holds every capability
/// a moderator holds, plus user, admin and expense management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Moderator,
}

/// Capability granted by a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ViewDashboard,
    ViewInventory,
    ViewProducts,
    ViewSettings,
    ManageUsers,
    ManageAdmins,
    ViewExpenses,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::SuperAdmin, Role::Moderator];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Moderator => "MODERATOR",
        }
    }

    /// Check whether this role grants a capability
    pub fn can(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewDashboard
            | Capability::ViewInventory
            | Capability::ViewProducts
            | Capability::ViewSettings => true,
            Capability::ManageUsers | Capability::ManageAdmins | Capability::ViewExpenses => {
                matches!(self, Self::SuperAdmin)
            }
        }
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "MODERATOR" => Ok(Self::Moderator),
            _ => Err(format!("invalid admin role: {s}")),
        }
    }
}

/// Admin domain model
#[derive(Debug, Clone)]
pub struct Admin {
    pub admin_id: String,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Admin row as stored in the `admins` table
#[derive(Debug, Clone, FromRow)]
pub struct AdminRecord {
    pub admin_id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AdminRecord> for Admin {
    type Error = String;

    fn try_from(record: AdminRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            role: record.role.parse()?,
            admin_id: record.admin_id,
            name: record.name,
            email: record.email,
            password_hash: record.password_hash,
            created_at: record.created_at,
        })
    }
}

/// Data for inserting a new admin
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub admin_id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}
