//! Dashboard routes

use std::fmt;

use crate::{constants::paths, models::Capability};

/// Dashboard page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    Dashboard,
    Inventory,
    Products,
    Users,
    Moderators,
    Settings,
    Expenses,
    /// Any path the dashboard does not know
    Other(String),
}

impl Route {
    /// Resolve a browser path, ignoring query string and trailing slash
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Self::Dashboard,
            paths::SIGN_IN => Self::SignIn,
            paths::DASHBOARD => Self::Dashboard,
            paths::INVENTORY => Self::Inventory,
            paths::PRODUCTS => Self::Products,
            paths::USERS => Self::Users,
            paths::MODERATORS => Self::Moderators,
            paths::SETTINGS => Self::Settings,
            paths::EXPENSES => Self::Expenses,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::SignIn => paths::SIGN_IN,
            Self::Dashboard => paths::DASHBOARD,
            Self::Inventory => paths::INVENTORY,
            Self::Products => paths::PRODUCTS,
            Self::Users => paths::USERS,
            Self::Moderators => paths::MODERATORS,
            Self::Settings => paths::SETTINGS,
            Self::Expenses => paths::EXPENSES,
            Self::Other(path) => path,
        }
    }

    /// Capability the route guard demands before rendering this page.
    ///
    /// Only users and expenses are gated here; the moderators page checks
    /// access itself.
    pub fn guarded_capability(&self) -> Option<Capability> {
        match self {
            Self::Users => Some(Capability::ManageUsers),
            Self::Expenses => Some(Capability::ViewExpenses),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
