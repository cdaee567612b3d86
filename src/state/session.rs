//! Session store: who is using the app right now.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one principal (a child picked on the selection screen, or the
//! admin) drives a browser session. The store is provided to the component
//! tree as an `RwSignal` context; route guards and identity-aware views read
//! it, login/logout flows mutate it. Each mutation writes through to
//! `localStorage` so a reload can restore the session without
//! re-authenticating.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// Storage key for the serialized child principal.
pub const CHILD_KEY: &str = "sprout_current_child";
/// Storage key for the serialized admin principal.
pub const ADMIN_KEY: &str = "sprout_current_admin";

/// A child identity selected on the child-selection screen.
///
/// `extra` is an open map for whatever profile fields the login view chooses
/// to attach (level, coins, avatar, ...); only `id` and `name` are required.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildPrincipal {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The administrator identity produced by the admin login view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminPrincipal {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Who is authenticated in this browser session.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Child(ChildPrincipal),
    Admin(AdminPrincipal),
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin(_))
    }

    pub fn current_child(&self) -> Option<&ChildPrincipal> {
        match self {
            Self::Child(child) => Some(child),
            _ => None,
        }
    }
}

/// Single source of truth for the current principal.
///
/// Invariant: at most one principal slot is populated at any time; setting
/// one clears the other, in memory and in storage.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    state: SessionState,
}

impl SessionStore {
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin()
    }

    pub fn current_child(&self) -> Option<&ChildPrincipal> {
        self.state.current_child()
    }

    /// Log in as `child`, clearing any admin identity.
    pub fn set_child(&mut self, child: ChildPrincipal) {
        storage::save_json(CHILD_KEY, &child);
        storage::remove(ADMIN_KEY);
        self.state = SessionState::Child(child);
    }

    /// Log in as `admin`, clearing any child identity.
    pub fn set_admin(&mut self, admin: AdminPrincipal) {
        storage::save_json(ADMIN_KEY, &admin);
        storage::remove(CHILD_KEY);
        self.state = SessionState::Admin(admin);
    }

    /// Log out. Safe to call when already anonymous.
    pub fn logout(&mut self) {
        storage::remove(CHILD_KEY);
        storage::remove(ADMIN_KEY);
        self.state = SessionState::Anonymous;
    }

    /// Rebuild the session from storage. Run once at application start.
    pub fn restore(&mut self) {
        let child_raw = storage::load_string(CHILD_KEY);
        let admin_raw = storage::load_string(ADMIN_KEY);
        if child_raw.is_some() && admin_raw.is_some() {
            // Mutating operations clear the opposite key, so a legitimate
            // flow never leaves both behind.
            log::warn!("both child and admin session records present; restoring as admin");
        }
        self.state = restored_state(child_raw.as_deref(), admin_raw.as_deref());
    }
}

/// Compute the restored state from the raw stored records.
///
/// The child record applies first and a stored admin record overrides it, so
/// a conflicting pair restores as admin. A record that fails to parse counts
/// as absent.
pub fn restored_state(child_raw: Option<&str>, admin_raw: Option<&str>) -> SessionState {
    let mut state = SessionState::Anonymous;
    if let Some(raw) = child_raw {
        if let Ok(child) = serde_json::from_str::<ChildPrincipal>(raw) {
            state = SessionState::Child(child);
        }
    }
    if let Some(raw) = admin_raw {
        if let Ok(admin) = serde_json::from_str::<AdminPrincipal>(raw) {
            state = SessionState::Admin(admin);
        }
    }
    state
}
