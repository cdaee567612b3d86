//! Domain operations over the hosted table store.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `ApiResult` so views can tell an empty result from a
//! failed call; views log failures through the diagnostic channel and
//! degrade to empty UI instead of crashing.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::baas::{self, ApiResult, Filter, Order};
use super::config;
use super::types::{Achievement, AdminRecord, CheckIn, CheckInStatus, Profile, StudyPlan, Wish, WishStatus};
use crate::util::schedule;

const CHECK_INS: &str = "check_ins";
const PROFILES: &str = "profiles";
const ACHIEVEMENTS: &str = "achievements";
const WISHES: &str = "wishes";
const ADMINS: &str = "admins";

/// Reward earned by a successful check-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckInReward {
    pub coins: i64,
    pub exp: i64,
}

/// Record a check-in for `plan` and credit the child's profile.
///
/// The check-in is stored first; a profile credit that fails afterwards
/// fails the whole call so the admin sees the pending record either way.
pub async fn check_in(plan: &StudyPlan, user_id: &str) -> ApiResult<CheckInReward> {
    let backend = config::tables();
    let record = serde_json::json!({
        "id": Uuid::new_v4().to_string(),
        "user_id": user_id,
        "task_id": plan.id,
        "task_name": plan.name,
        "duration_minutes": plan.duration_minutes,
        "status": CheckInStatus::Pending,
    });
    let _created: CheckIn = baas::insert(&backend, CHECK_INS, &record).await?;

    let profiles: Vec<Profile> =
        baas::fetch_all(&backend, PROFILES, &[Filter::eq("user_id", user_id)], None).await?;
    if let Some(profile) = profiles.into_iter().next() {
        let (coins, exp) = credited(&profile, plan);
        let _updated: Profile = baas::update(
            &backend,
            PROFILES,
            &profile.id,
            &serde_json::json!({ "coins": coins, "exp": exp }),
        )
        .await?;
    }

    Ok(CheckInReward {
        coins: plan.coins_reward,
        exp: plan.exp_reward,
    })
}

/// New balances after crediting `plan`'s rewards to `profile`.
fn credited(profile: &Profile, plan: &StudyPlan) -> (i64, i64) {
    (profile.coins + plan.coins_reward, profile.exp + plan.exp_reward)
}

/// Check-ins recorded since local midnight for `user_id`.
pub async fn get_today_check_ins(user_id: &str) -> ApiResult<Vec<CheckIn>> {
    let filters = [
        Filter::eq("user_id", user_id),
        Filter::gte("created_at", schedule::today_start_iso()),
    ];
    baas::fetch_all(&config::tables(), CHECK_INS, &filters, None).await
}

/// Full check-in history for `user_id`, newest first.
pub async fn list_check_ins(user_id: &str) -> ApiResult<Vec<CheckIn>> {
    baas::fetch_all(
        &config::tables(),
        CHECK_INS,
        &[Filter::eq("user_id", user_id)],
        Some(Order::desc("created_at")),
    )
    .await
}

/// Check-ins awaiting admin review, oldest first.
pub async fn list_pending_check_ins() -> ApiResult<Vec<CheckIn>> {
    baas::fetch_all(
        &config::tables(),
        CHECK_INS,
        &[Filter::eq("status", "pending")],
        Some(Order::asc("created_at")),
    )
    .await
}

/// Approve or reject one pending check-in.
pub async fn review_check_in(id: &str, approved: bool) -> ApiResult<CheckIn> {
    let status = if approved {
        CheckInStatus::Approved
    } else {
        CheckInStatus::Rejected
    };
    baas::update(&config::tables(), CHECK_INS, id, &serde_json::json!({ "status": status })).await
}

/// Fetch the profile for `user_id`, creating a fresh one when absent.
pub async fn get_or_create_profile(user_id: &str, username: &str) -> ApiResult<Profile> {
    let backend = config::tables();
    let existing: Vec<Profile> =
        baas::fetch_all(&backend, PROFILES, &[Filter::eq("user_id", user_id)], None).await?;
    if let Some(profile) = existing.into_iter().next() {
        return Ok(profile);
    }
    baas::insert(
        &backend,
        PROFILES,
        &serde_json::json!({
            "id": Uuid::new_v4().to_string(),
            "user_id": user_id,
            "username": username,
            "nickname": username,
            "level": 1,
            "exp": 0,
            "coins": 0,
        }),
    )
    .await
}

/// All child profiles, for the selection screen and admin management.
pub async fn list_children() -> ApiResult<Vec<Profile>> {
    baas::fetch_all(&config::tables(), PROFILES, &[], Some(Order::asc("username"))).await
}

/// Create a child profile with a fresh login identity.
pub async fn create_child(username: &str, nickname: &str) -> ApiResult<Profile> {
    baas::insert(
        &config::tables(),
        PROFILES,
        &serde_json::json!({
            "id": Uuid::new_v4().to_string(),
            "user_id": Uuid::new_v4().to_string(),
            "username": username,
            "nickname": nickname,
            "level": 1,
            "exp": 0,
            "coins": 0,
        }),
    )
    .await
}

/// Apply a partial update to a child profile row.
pub async fn update_child(id: &str, partial: &serde_json::Value) -> ApiResult<Profile> {
    baas::update(&config::tables(), PROFILES, id, partial).await
}

/// The achievement catalog, easiest first.
pub async fn get_achievements() -> ApiResult<Vec<Achievement>> {
    baas::fetch_all(
        &config::tables(),
        ACHIEVEMENTS,
        &[],
        Some(Order::asc("requirement_value")),
    )
    .await
}

/// Seed the achievement catalog. One-shot setup action on the admin
/// dashboard; safe to re-run only against an empty table.
pub async fn seed_achievements() -> ApiResult<()> {
    let backend = config::tables();
    for record in achievement_seed() {
        let _created: Achievement = baas::insert(&backend, ACHIEVEMENTS, &record).await?;
    }
    Ok(())
}

fn achievement_seed() -> Vec<serde_json::Value> {
    [
        ("First Sprout", "Complete your first check-in", "🌱", "total_checkins", 1, 20),
        ("Keep Going", "Check in 7 days in a row", "🔥", "streak_days", 7, 50),
        ("Hundred Days", "Check in 100 days in a row", "💪", "streak_days", 100, 200),
        ("Piano Star", "Complete 50 piano check-ins", "🎹", "task_completion", 50, 100),
        ("Bookworm", "Complete 50 reading check-ins", "📚", "task_completion", 50, 100),
    ]
    .into_iter()
    .map(|(name, description, icon, requirement_type, requirement_value, coins_reward)| {
        serde_json::json!({
            "id": Uuid::new_v4().to_string(),
            "name": name,
            "description": description,
            "icon": icon,
            "requirement_type": requirement_type,
            "requirement_value": requirement_value,
            "coins_reward": coins_reward,
        })
    })
    .collect()
}

/// Wishes belonging to one child, newest first.
pub async fn list_wishes(user_id: &str) -> ApiResult<Vec<Wish>> {
    baas::fetch_all(
        &config::tables(),
        WISHES,
        &[Filter::eq("user_id", user_id)],
        Some(Order::desc("created_at")),
    )
    .await
}

/// Every wish across children, newest first, for the admin queue.
pub async fn list_all_wishes() -> ApiResult<Vec<Wish>> {
    baas::fetch_all(&config::tables(), WISHES, &[], Some(Order::desc("created_at"))).await
}

/// File a new wish for `user_id`.
pub async fn create_wish(user_id: &str, name: &str, cost_coins: i64) -> ApiResult<Wish> {
    baas::insert(
        &config::tables(),
        WISHES,
        &serde_json::json!({
            "id": Uuid::new_v4().to_string(),
            "user_id": user_id,
            "name": name,
            "cost_coins": cost_coins,
            "status": WishStatus::Open,
        }),
    )
    .await
}

/// Mark a wish granted.
pub async fn grant_wish(id: &str) -> ApiResult<Wish> {
    baas::update(
        &config::tables(),
        WISHES,
        id,
        &serde_json::json!({ "status": WishStatus::Granted }),
    )
    .await
}

/// Look up the admin record for `username`, if any.
pub async fn fetch_admin(username: &str) -> ApiResult<Option<AdminRecord>> {
    let admins: Vec<AdminRecord> =
        baas::fetch_all(&config::tables(), ADMINS, &[Filter::eq("username", username)], None).await?;
    Ok(admins.into_iter().next())
}
