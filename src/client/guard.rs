//! Route guard
//!
//! Decides, on every navigation and every session change, whether the
//! requested page may render. The sign-in page is never guarded.

use super::{routes::Route, session::Session};

/// Heading shown in place of a page the role may not see
pub const ACCESS_DENIED_TITLE: &str = "Access Denied";

/// Body text shown in place of a page the role may not see
pub const ACCESS_DENIED_MESSAGE: &str = "You don't have permission to access this page.";

/// Guard state for the current route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Hydrating,
    Unauthenticated,
    AuthenticatedUnrestricted,
    AuthenticatedRestricted,
}

/// What the dashboard should do with the requested page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session not read yet
    Loading,
    /// Render the page
    Render,
    /// Render the access-denied view instead of the page
    AccessDenied,
    /// Navigate elsewhere
    Redirect(Route),
    /// Render nothing; a redirect is already in flight
    Blank,
}

/// Route guard state machine
#[derive(Debug, Clone)]
pub struct RouteGuard {
    state: GuardState,
    hydrated: bool,
    /// Route a sign-in redirect was last issued from
    redirected_from: Option<Route>,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteGuard {
    pub fn new() -> Self {
        Self {
            state: GuardState::Hydrating,
            hydrated: false,
            redirected_from: None,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Mark the session as readable and evaluate the current route
    pub fn finish_hydration(&mut self, session: &Session, route: &Route) -> GuardOutcome {
        self.hydrated = true;
        self.evaluate(session, route)
    }

    /// Evaluate `route` against the session.
    ///
    /// Call on every navigation and after every session mutation. A
    /// redirect to sign-in is emitted once per route; repeat evaluations
    /// while it is pending yield [`GuardOutcome::Blank`].
    pub fn evaluate(&mut self, session: &Session, route: &Route) -> GuardOutcome {
        if *route == Route::SignIn {
            self.redirected_from = None;
            return GuardOutcome::Render;
        }

        if !self.hydrated {
            self.state = GuardState::Hydrating;
            return GuardOutcome::Loading;
        }

        let Some(role) = session.role() else {
            self.state = GuardState::Unauthenticated;
            if self.redirected_from.as_ref() == Some(route) {
                return GuardOutcome::Blank;
            }
            tracing::debug!(route = %route, "Not signed in, redirecting to sign-in");
            self.redirected_from = Some(route.clone());
            return GuardOutcome::Redirect(Route::SignIn);
        };

        self.redirected_from = None;

        let restricted = route
            .guarded_capability()
            .is_some_and(|capability| !role.can(capability));

        if restricted {
            tracing::debug!(route = %route, role = %role, "Route denied for role");
            self.state = GuardState::AuthenticatedRestricted;
            GuardOutcome::AccessDenied
        } else {
            self.state = GuardState::AuthenticatedUnrestricted;
            GuardOutcome::Render
        }
    }
}
