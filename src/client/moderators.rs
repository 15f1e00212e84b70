//! Moderators page
//!
//! Page access, listing rows, the create form and delete eligibility for
//! the moderator management view.

use serde::Serialize;
use uuid::Uuid;

use crate::{
    handlers::admin::AdminSummary,
    models::{Capability, Role},
    utils::{is_missing, validate_password_length},
};

use super::session::Session;

pub const ACCESS_DENIED_MESSAGE: &str = "Only super admins can manage moderators.";
pub const FIELDS_REQUIRED_MESSAGE: &str = "Name, email, and password are required";
pub const SUPER_ADMIN_UNDELETABLE_MESSAGE: &str = "Cannot delete Super Admin accounts";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this moderator?";

/// Whether the signed-in admin may open the moderators page
pub fn can_manage(session: &Session) -> bool {
    session
        .role()
        .is_some_and(|role| role.can(Capability::ManageAdmins))
}

/// Body for `POST /auth/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModerator {
    pub admin_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Create-moderator form input
#[derive(Debug, Clone, Default)]
pub struct ModeratorForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ModeratorForm {
    /// Validate the form and build the request body with a fresh admin id
    pub fn validate(&self) -> Result<NewModerator, &'static str> {
        if [&self.name, &self.email, &self.password]
            .into_iter()
            .any(|field| is_missing(Some(field)))
        {
            return Err(FIELDS_REQUIRED_MESSAGE);
        }
        validate_password_length(&self.password)?;

        Ok(NewModerator {
            admin_id: Uuid::new_v4().to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: Role::Moderator,
        })
    }
}

/// Result of pressing delete on a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteDecision {
    /// Refuse with a message; no request is sent
    Refused(&'static str),
    /// Ask for confirmation before sending the delete request
    Confirm(&'static str),
}

/// One listing row
#[derive(Debug, Clone)]
pub struct ModeratorRow {
    pub admin: AdminSummary,
    pub deletable: bool,
}

/// Build the listing rows in server order
pub fn rows(admins: Vec<AdminSummary>) -> Vec<ModeratorRow> {
    admins
        .into_iter()
        .map(|admin| ModeratorRow {
            deletable: !admin.role.is_super_admin(),
            admin,
        })
        .collect()
}

/// Decide what pressing delete on `admin` does
pub fn delete_decision(admin: &AdminSummary) -> DeleteDecision {
    if admin.role.is_super_admin() {
        DeleteDecision::Refused(SUPER_ADMIN_UNDELETABLE_MESSAGE)
    } else {
        DeleteDecision::Confirm(DELETE_CONFIRMATION)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::handlers::auth::AdminProfile;

    fn summary(admin_id: &str, role: Role) -> AdminSummary {
        AdminSummary {
            admin_id: admin_id.to_string(),
            name: admin_id.to_string(),
            email: format!("{admin_id}@inventory.com"),
            role,
            created_at: Utc::now(),
        }
    }

    fn form(name: &str, email: &str, password: &str) -> ModeratorForm {
        ModeratorForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_can_manage() {
        let mut session = Session::new();
        assert!(!can_manage(&session));

        let mut profile = AdminProfile {
            admin_id: "admin-002".to_string(),
            name: "Moderator User".to_string(),
            email: "moderator@inventory.com".to_string(),
            role: Role::Moderator,
        };
        session.set_admin(Some(profile.clone()));
        assert!(!can_manage(&session));

        profile.role = Role::SuperAdmin;
        session.set_admin(Some(profile));
        assert!(can_manage(&session));
    }

    #[test]
    fn test_form_requires_all_fields() {
        assert_eq!(
            form("", "a@b.com", "secret1").validate(),
            Err(FIELDS_REQUIRED_MESSAGE)
        );
        assert_eq!(
            form("Ann", "", "secret1").validate(),
            Err(FIELDS_REQUIRED_MESSAGE)
        );
        assert_eq!(
            form("Ann", "a@b.com", "").validate(),
            Err(FIELDS_REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn test_form_rejects_short_password() {
        assert_eq!(
            form("Ann", "a@b.com", "123").validate(),
            Err(crate::utils::PASSWORD_TOO_SHORT)
        );
    }

    #[test]
    fn test_form_builds_moderator_with_uuid() {
        let first = form("Ann", "a@b.com", "secret1").validate().unwrap();
        let second = form("Ann", "a@b.com", "secret1").validate().unwrap();

        assert_eq!(first.role, Role::Moderator);
        assert!(Uuid::parse_str(&first.admin_id).is_ok());
        assert_ne!(first.admin_id, second.admin_id);

        let body = serde_json::to_value(&first).unwrap();
        assert_eq!(body["role"], "MODERATOR");
        assert!(body.get("adminId").is_some());
    }

    #[test]
    fn test_delete_decision() {
        assert_eq!(
            delete_decision(&summary("admin-001", Role::SuperAdmin)),
            DeleteDecision::Refused(SUPER_ADMIN_UNDELETABLE_MESSAGE)
        );
        assert_eq!(
            delete_decision(&summary("admin-002", Role::Moderator)),
            DeleteDecision::Confirm(DELETE_CONFIRMATION)
        );
    }

    #[test]
    fn test_rows_keep_order_and_flag_deletable() {
        let rows = rows(vec![
            summary("admin-001", Role::SuperAdmin),
            summary("admin-002", Role::Moderator),
        ]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].admin.admin_id, "admin-001");
        assert!(!rows[0].deletable);
        assert!(rows[1].deletable);
    }
}
