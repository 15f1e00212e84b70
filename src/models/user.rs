//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Inventory user record
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
}
