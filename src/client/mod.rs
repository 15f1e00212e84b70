//! Dashboard client logic
//!
//! Everything the browser dashboard decides from the signed-in admin's role:
//! the session context, the route guard, the sidebar links, the sign-in
//! form and the moderators and users pages, plus typed bindings for the
//! REST API.

pub mod api;
pub mod dashboard;
pub mod guard;
pub mod moderators;
pub mod navigation;
pub mod routes;
pub mod session;
pub mod signin;
pub mod users;

pub use api::{ApiClient, ClientError};
pub use dashboard::Dashboard;
pub use guard::{GuardOutcome, GuardState, RouteGuard};
pub use navigation::{nav_links, sidebar, NavLink, Sidebar};
pub use routes::Route;
pub use session::Session;
pub use signin::SignInForm;
