//! Sidebar navigation derived from role

use serde::Serialize;

use crate::{handlers::auth::AdminProfile, models::Role};

use super::{routes::Route, session::Session};

/// Sidebar link icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Layout,
    Archive,
    Clipboard,
    User,
    Shield,
    SlidersHorizontal,
    CircleDollarSign,
}

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
    pub icon: Icon,
    /// Labels are hidden when the sidebar is collapsed; icons never are
    pub show_label: bool,
}

impl NavLink {
    pub fn href(&self) -> &str {
        self.route.path()
    }

    /// Active when the path matches, with `/` counting as the dashboard
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path == self.href() || (current_path == "/" && self.route == Route::Dashboard)
    }
}

/// Links the role may follow, in sidebar order
pub fn nav_links(role: Role, collapsed: bool) -> Vec<NavLink> {
    let entries = [
        (Route::Dashboard, "Dashboard", Icon::Layout, false),
        (Route::Inventory, "Inventory", Icon::Archive, false),
        (Route::Products, "Products", Icon::Clipboard, false),
        (Route::Users, "Users", Icon::User, true),
        (Route::Moderators, "Moderators", Icon::Shield, true),
        (Route::Settings, "Settings", Icon::SlidersHorizontal, false),
        (Route::Expenses, "Expenses", Icon::CircleDollarSign, true),
    ];

    entries
        .into_iter()
        .filter(|(_, _, _, super_admin_only)| !super_admin_only || role.is_super_admin())
        .map(|(route, label, icon, _)| NavLink {
            route,
            label,
            icon,
            show_label: !collapsed,
        })
        .collect()
}

/// Rendered sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub links: Vec<NavLink>,
    pub collapsed: bool,
    /// Signed-in admin card, hidden while collapsed
    pub admin_card: Option<AdminProfile>,
}

/// Build the sidebar; absent when nobody is signed in
pub fn sidebar(session: &Session) -> Option<Sidebar> {
    let admin = session.admin()?;
    let collapsed = session.is_sidebar_collapsed();

    Some(Sidebar {
        links: nav_links(admin.role, collapsed),
        collapsed,
        admin_card: (!collapsed).then(|| admin.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(links: &[NavLink]) -> Vec<&'static str> {
        links.iter().map(|l| l.label).collect()
    }

    #[test]
    fn test_super_admin_links() {
        assert_eq!(
            labels(&nav_links(Role::SuperAdmin, false)),
            vec!["Dashboard", "Inventory", "Products", "Users", "Moderators", "Settings", "Expenses"]
        );
    }

    #[test]
    fn test_moderator_links() {
        assert_eq!(
            labels(&nav_links(Role::Moderator, false)),
            vec!["Dashboard", "Inventory", "Products", "Settings"]
        );
    }

    #[test]
    fn test_collapse_hides_labels_only() {
        for role in Role::ALL {
            let expanded = nav_links(role, false);
            let collapsed = nav_links(role, true);

            assert_eq!(labels(&expanded), labels(&collapsed));
            assert!(expanded.iter().all(|l| l.show_label));
            assert!(collapsed.iter().all(|l| !l.show_label));
        }
    }

    #[test]
    fn test_root_path_activates_dashboard() {
        let links = nav_links(Role::Moderator, false);
        let active: Vec<_> = links.iter().filter(|l| l.is_active("/")).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].route, Route::Dashboard);
        assert!(links[2].is_active("/products"));
    }

    #[test]
    fn test_sidebar_requires_admin() {
        let mut session = Session::new();
        assert!(sidebar(&session).is_none());

        session.set_admin(Some(AdminProfile {
            admin_id: "admin-001".to_string(),
            name: "Super Admin".to_string(),
            email: "superadmin@inventory.com".to_string(),
            role: Role::SuperAdmin,
        }));
        let expanded = sidebar(&session).unwrap();
        assert_eq!(expanded.links.len(), 7);
        assert!(expanded.admin_card.is_some());

        session.toggle_sidebar();
        let collapsed = sidebar(&session).unwrap();
        assert!(collapsed.collapsed);
        assert!(collapsed.admin_card.is_none());
    }
}
