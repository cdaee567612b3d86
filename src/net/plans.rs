//! Study-plan CRUD against the relational scheduling backend.
//!
//! Plans live in their own store, separate from the table backend that
//! holds check-ins and profiles; only the scheduling metadata (weekdays,
//! time period, status) comes from here.

use uuid::Uuid;

use super::baas::{self, ApiResult, Filter, Order};
use super::config;
use super::types::{PlanStatus, StudyPlan};

const STUDY_PLANS: &str = "study_plans";

/// Plans offered for check-in, in display order.
pub async fn get_active_plans() -> ApiResult<Vec<StudyPlan>> {
    baas::fetch_all(
        &config::plans(),
        STUDY_PLANS,
        &[Filter::eq("status", "active")],
        Some(Order::asc("sort_order")),
    )
    .await
}

/// Every plan regardless of status, for admin management.
pub async fn list_plans() -> ApiResult<Vec<StudyPlan>> {
    baas::fetch_all(&config::plans(), STUDY_PLANS, &[], Some(Order::asc("sort_order"))).await
}

/// One plan by id.
pub async fn get_plan(id: &str) -> ApiResult<StudyPlan> {
    baas::fetch_by_id(&config::plans(), STUDY_PLANS, id).await
}

/// Create a plan from the admin form.
pub async fn create_plan(record: &serde_json::Value) -> ApiResult<StudyPlan> {
    baas::insert(&config::plans(), STUDY_PLANS, record).await
}

/// Apply a partial update to a plan row.
pub async fn update_plan(id: &str, partial: &serde_json::Value) -> ApiResult<StudyPlan> {
    baas::update(&config::plans(), STUDY_PLANS, id, partial).await
}

/// Pause or resume a plan.
pub async fn set_plan_status(id: &str, status: PlanStatus) -> ApiResult<StudyPlan> {
    update_plan(id, &serde_json::json!({ "status": status })).await
}

/// Seed the default plan catalog. One-shot setup action on the admin
/// dashboard; the defaults run daily until the admin narrows their weekdays.
pub async fn seed_plans() -> ApiResult<()> {
    let defaults: [(&str, &str, &str, i64, i64, i64); 6] = [
        ("Piano practice", "🎹", "Practice piano for 30 minutes", 30, 15, 30),
        ("Homework", "📝", "Finish the day's school assignments", 30, 10, 20),
        ("Handwriting", "✍️", "Practice handwriting for 20 minutes", 20, 10, 20),
        ("Math drills", "🔢", "Work through math exercises", 20, 10, 20),
        ("Reading", "📚", "Read a book for 30 minutes", 30, 10, 20),
        ("Singing", "🎤", "Practice singing", 15, 5, 10),
    ];
    for (index, (name, icon, description, duration_minutes, coins_reward, exp_reward)) in
        defaults.into_iter().enumerate()
    {
        let record = serde_json::json!({
            "id": Uuid::new_v4().to_string(),
            "name": name,
            "icon": icon,
            "description": description,
            "weekdays": [],
            "time_period": "",
            "duration_minutes": duration_minutes,
            "coins_reward": coins_reward,
            "exp_reward": exp_reward,
            "status": PlanStatus::Active,
            "sort_order": index + 1,
        });
        let _created: StudyPlan = baas::insert(&config::plans(), STUDY_PLANS, &record).await?;
    }
    Ok(())
}
