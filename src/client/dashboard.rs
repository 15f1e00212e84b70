//! Dashboard shell
//!
//! Owns the session, the route guard and the current route, and re-runs the
//! guard after every navigation and session change.

use crate::handlers::auth::AdminProfile;

use super::{
    guard::{GuardOutcome, GuardState, RouteGuard},
    navigation::{self, Sidebar},
    routes::Route,
    session::Session,
};

/// Dashboard state for one browser tab
#[derive(Debug, Clone)]
pub struct Dashboard {
    session: Session,
    guard: RouteGuard,
    route: Route,
    outcome: GuardOutcome,
}

impl Dashboard {
    /// Open the dashboard at `path`; nothing renders until [`Dashboard::hydrate`]
    pub fn new(path: &str) -> Self {
        let session = Session::new();
        let route = Route::from_path(path);
        let mut guard = RouteGuard::new();
        let outcome = guard.evaluate(&session, &route);

        Self {
            session,
            guard,
            route,
            outcome,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn outcome(&self) -> &GuardOutcome {
        &self.outcome
    }

    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }

    /// Session is readable; evaluate the current route for the first time
    pub fn hydrate(&mut self) -> &GuardOutcome {
        let outcome = self.guard.finish_hydration(&self.session, &self.route);
        self.apply(outcome)
    }

    pub fn navigate(&mut self, path: &str) -> &GuardOutcome {
        self.route = Route::from_path(path);
        self.reevaluate()
    }

    /// Store a sign-in result and land on the dashboard
    pub fn sign_in(&mut self, admin: AdminProfile, token: String) -> &GuardOutcome {
        self.session.sign_in(admin, token);
        if self.route == Route::SignIn {
            self.route = Route::Dashboard;
        }
        self.reevaluate()
    }

    pub fn set_admin(&mut self, admin: Option<AdminProfile>) -> &GuardOutcome {
        self.session.set_admin(admin);
        self.reevaluate()
    }

    pub fn logout(&mut self) -> &GuardOutcome {
        self.session.logout();
        self.reevaluate()
    }

    pub fn toggle_sidebar(&mut self) {
        self.session.toggle_sidebar();
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.session.set_dark_mode(dark);
    }

    /// Sidebar for the current session, if anyone is signed in
    pub fn sidebar(&self) -> Option<Sidebar> {
        navigation::sidebar(&self.session)
    }

    fn reevaluate(&mut self) -> &GuardOutcome {
        let outcome = self.guard.evaluate(&self.session, &self.route);
        self.apply(outcome)
    }

    /// Follow a redirect, if any, and record the final outcome
    fn apply(&mut self, outcome: GuardOutcome) -> &GuardOutcome {
        self.outcome = match outcome {
            GuardOutcome::Redirect(target) => {
                tracing::debug!(from = %self.route, to = %target, "Following guard redirect");
                self.route = target;
                self.guard.evaluate(&self.session, &self.route)
            }
            other => other,
        };
        &self.outcome
    }
}
