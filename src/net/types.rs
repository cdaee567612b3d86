//! Row DTOs shared by the data-access modules and the views.
//!
//! DESIGN
//! ======
//! These types mirror the remote table schemas so serde round-trips stay
//! lossless. Numeric columns the backend may omit default to zero, matching
//! how the views treat a brand-new child.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{AdminPrincipal, ChildPrincipal};

/// A child profile row. Children double as login identities: picking one on
/// the selection screen turns its profile into the session principal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub nickname: String,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default)]
    pub exp: i64,
    #[serde(default)]
    pub coins: i64,
}

fn default_level() -> i64 {
    1
}

impl Profile {
    /// The principal stored in the session when this child logs in.
    pub fn to_principal(&self) -> ChildPrincipal {
        let mut extra = serde_json::Map::new();
        extra.insert("level".to_owned(), self.level.into());
        extra.insert("coins".to_owned(), self.coins.into());
        extra.insert("exp".to_owned(), self.exp.into());
        ChildPrincipal {
            id: self.user_id.clone(),
            name: self.nickname.clone(),
            extra,
        }
    }
}

/// One check-in row.
///
/// The `task_*` column names are inherited from the first schema generation;
/// they now carry the study plan's id and name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: String,
    pub user_id: String,
    pub task_id: String,
    pub task_name: String,
    pub duration_minutes: i64,
    #[serde(default)]
    pub status: CheckInStatus,
    #[serde(default)]
    pub created_at: String,
}

/// Review state of a check-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl CheckInStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Achievement catalog row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub requirement_type: String,
    pub requirement_value: i64,
    #[serde(default)]
    pub coins_reward: i64,
}

/// A wish a child wants to spend coins on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub cost_coins: i64,
    #[serde(default)]
    pub status: WishStatus,
    #[serde(default)]
    pub created_at: String,
}

/// Whether a wish is still open or has been granted by the admin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WishStatus {
    #[default]
    Open,
    Granted,
}

/// Admin credential row. The comparison happens client-side; this app trusts
/// the household it runs in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminRecord {
    pub id: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub nickname: String,
}

impl AdminRecord {
    /// The principal stored in the session after a successful login.
    /// The password never enters the session or storage.
    pub fn to_principal(&self) -> AdminPrincipal {
        let mut extra = serde_json::Map::new();
        extra.insert("nickname".to_owned(), self.nickname.clone().into());
        AdminPrincipal {
            id: self.id.clone(),
            name: self.username.clone(),
            extra,
        }
    }
}

/// A recurring study plan: the schedulable unit children check in on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub weekdays: Vec<u8>,
    #[serde(default)]
    pub time_period: String,
    pub duration_minutes: i64,
    pub coins_reward: i64,
    pub exp_reward: i64,
    #[serde(default)]
    pub status: PlanStatus,
    #[serde(default)]
    pub sort_order: i64,
}

/// Whether a plan is offered for check-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    #[default]
    Active,
    Paused,
}
