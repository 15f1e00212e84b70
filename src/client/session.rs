//! Dashboard session state
//!
//! A [`Session`] is the single source of truth for who is signed in and
//! with which role. It is an explicit context object owned by the
//! dashboard and lent to the route guard and navigation, never a global.

use crate::{handlers::auth::AdminProfile, models::Role};

/// Signed-in admin snapshot and UI preferences
#[derive(Debug, Clone, Default)]
pub struct Session {
    admin: Option<AdminProfile>,
    token: Option<String>,
    is_sidebar_collapsed: bool,
    is_dark_mode: bool,
    revision: u64,
}

impl Session {
    /// Empty session: nobody signed in, sidebar expanded, light mode
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admin(&self) -> Option<&AdminProfile> {
        self.admin.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.admin.as_ref().map(|a| a.role)
    }

    /// True iff an admin snapshot is present
    pub fn is_authenticated(&self) -> bool {
        self.admin.is_some()
    }

    /// Bearer token issued at sign-in
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_sidebar_collapsed(&self) -> bool {
        self.is_sidebar_collapsed
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    /// Incremented on every state change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the admin snapshot.
    ///
    /// The token belongs to one account: clearing the snapshot or switching
    /// to a different `admin_id` drops it.
    pub fn set_admin(&mut self, admin: Option<AdminProfile>) {
        if admin.is_none() && self.admin.is_none() && self.token.is_none() {
            return;
        }
        let same_account = matches!(
            (&self.admin, &admin),
            (Some(current), Some(next)) if current.admin_id == next.admin_id
        );
        if !same_account {
            self.token = None;
        }
        self.admin = admin;
        self.revision += 1;
    }

    /// Store a successful sign-in result
    pub fn sign_in(&mut self, admin: AdminProfile, token: String) {
        self.set_admin(Some(admin));
        self.token = Some(token);
    }

    /// Forget the signed-in admin. Repeated calls are no-ops.
    pub fn logout(&mut self) {
        self.set_admin(None);
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        if self.is_sidebar_collapsed != collapsed {
            self.is_sidebar_collapsed = collapsed;
            self.revision += 1;
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.set_sidebar_collapsed(!self.is_sidebar_collapsed);
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        if self.is_dark_mode != dark {
            self.is_dark_mode = dark;
            self.revision += 1;
        }
    }
}
