use super::*;
use crate::state::session::{AdminPrincipal, ChildPrincipal};

fn anonymous() -> SessionState {
    SessionState::Anonymous
}

fn as_child() -> SessionState {
    SessionState::Child(ChildPrincipal {
        id: "c1".to_owned(),
        name: "Mei".to_owned(),
        extra: serde_json::Map::new(),
    })
}

fn as_admin() -> SessionState {
    SessionState::Admin(AdminPrincipal {
        id: "a1".to_owned(),
        name: "Mom".to_owned(),
        extra: serde_json::Map::new(),
    })
}

fn requirements(requires_auth: bool, requires_admin: bool) -> RouteRequirements {
    RouteRequirements {
        requires_auth,
        requires_admin,
    }
}

#[test]
fn public_route_allows_anonymous() {
    assert_eq!(decide(&anonymous(), requirements(false, false)), GuardOutcome::Allow);
}

#[test]
fn auth_route_redirects_anonymous_to_child_select() {
    assert_eq!(decide(&anonymous(), requirements(true, false)), GuardOutcome::ToChildSelect);
}

#[test]
fn admin_route_redirects_anonymous_to_child_select_not_admin_login() {
    // Auth check wins the tie-break even for admin-only routes.
    assert_eq!(decide(&anonymous(), requirements(true, true)), GuardOutcome::ToChildSelect);
}

#[test]
fn auth_route_allows_child() {
    assert_eq!(decide(&as_child(), requirements(true, false)), GuardOutcome::Allow);
}

#[test]
fn admin_route_redirects_child_to_admin_login() {
    assert_eq!(decide(&as_child(), requirements(true, true)), GuardOutcome::ToAdminLogin);
}

#[test]
fn admin_route_allows_admin() {
    assert_eq!(decide(&as_admin(), requirements(true, true)), GuardOutcome::Allow);
}

#[test]
fn decision_is_total_over_all_requirement_combinations() {
    for state in [anonymous(), as_child(), as_admin()] {
        for requires_auth in [false, true] {
            for requires_admin in [false, true] {
                // Every combination maps to exactly one outcome without panicking.
                let _ = decide(&state, requirements(requires_auth, requires_admin));
            }
        }
    }
}

#[test]
fn default_requirements_are_public() {
    assert_eq!(RouteRequirements::default(), requirements(false, false));
}

#[test]
fn redirect_paths_match_entry_routes() {
    assert_eq!(GuardOutcome::Allow.redirect_path(), None);
    assert_eq!(GuardOutcome::ToChildSelect.redirect_path(), Some("/"));
    assert_eq!(GuardOutcome::ToAdminLogin.redirect_path(), Some("/admin/login"));
}
