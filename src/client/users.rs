//! Users page
//!
//! Create form, listing rows and delete confirmation for inventory users.
//! Only super admins get create and delete actions.

use uuid::Uuid;

use crate::{
    models::{Capability, User},
    utils::is_missing,
};

use super::session::Session;

pub const FIELDS_REQUIRED_MESSAGE: &str = "Name and email are required";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this user?";

/// Whether the signed-in admin gets create and delete actions
pub fn can_manage(session: &Session) -> bool {
    session
        .role()
        .is_some_and(|role| role.can(Capability::ManageUsers))
}

/// Create-user form input
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}

impl UserForm {
    /// Validate the form and build the user with a fresh id
    pub fn validate(&self) -> Result<User, &'static str> {
        if is_missing(Some(&self.name)) || is_missing(Some(&self.email)) {
            return Err(FIELDS_REQUIRED_MESSAGE);
        }

        Ok(User {
            user_id: Uuid::new_v4().to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
        })
    }
}

/// One listing row
#[derive(Debug, Clone)]
pub struct UserRow {
    pub user: User,
    /// Delete action shown; pressing it asks [`DELETE_CONFIRMATION`] first
    pub deletable: bool,
}

/// Build the listing rows in server order
pub fn rows(users: Vec<User>, session: &Session) -> Vec<UserRow> {
    let deletable = can_manage(session);
    users
        .into_iter()
        .map(|user| UserRow { user, deletable })
        .collect()
}
