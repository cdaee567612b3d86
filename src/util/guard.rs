//! Route guard: navigation policy applied before a route renders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page installs the same redirect behavior on mount. The
//! decision itself is a synchronous, total function over the session state
//! and the route's declared requirements, so policy stays testable apart
//! from the router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, SessionStore};

/// Access requirements a route declares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteRequirements {
    /// Any logged-in principal may enter.
    pub const fn auth() -> Self {
        Self {
            requires_auth: true,
            requires_admin: false,
        }
    }

    /// Only the admin may enter.
    pub const fn admin() -> Self {
        Self {
            requires_auth: true,
            requires_admin: true,
        }
    }
}

/// What the guard decided for a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    ToChildSelect,
    ToAdminLogin,
}

impl GuardOutcome {
    /// Redirect target, or `None` when navigation proceeds unmodified.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::ToChildSelect => Some("/"),
            Self::ToAdminLogin => Some("/admin/login"),
        }
    }
}

/// Decide whether `state` may enter a route with `requirements`.
///
/// The auth check runs before the admin check: an admin-only route requested
/// while fully anonymous redirects to child selection, not to the admin
/// login. Inherited behavior; keep the order.
pub fn decide(state: &SessionState, requirements: RouteRequirements) -> GuardOutcome {
    if requirements.requires_auth && !state.is_logged_in() {
        GuardOutcome::ToChildSelect
    } else if requirements.requires_admin && !state.is_admin() {
        GuardOutcome::ToAdminLogin
    } else {
        GuardOutcome::Allow
    }
}

/// Redirect away whenever the session stops satisfying `requirements`.
pub fn install_route_guard<F>(session: RwSignal<SessionStore>, requirements: RouteRequirements, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let store = session.get();
        if let Some(path) = decide(store.state(), requirements).redirect_path() {
            navigate(path, NavigateOptions::default());
        }
    });
}
