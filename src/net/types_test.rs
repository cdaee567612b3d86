use super::*;

#[test]
fn profile_numeric_columns_default_to_new_child_values() {
    let raw = r#"{"id":"p1","user_id":"u1","username":"mei","nickname":"Mei"}"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.level, 1);
    assert_eq!(profile.exp, 0);
    assert_eq!(profile.coins, 0);
}

#[test]
fn profile_to_principal_uses_user_id_and_nickname() {
    let profile = Profile {
        id: "p1".to_owned(),
        user_id: "u1".to_owned(),
        username: "mei".to_owned(),
        nickname: "Mei".to_owned(),
        level: 3,
        exp: 250,
        coins: 120,
    };
    let principal = profile.to_principal();
    assert_eq!(principal.id, "u1");
    assert_eq!(principal.name, "Mei");
    assert_eq!(principal.extra.get("coins"), Some(&serde_json::json!(120)));
}

#[test]
fn admin_record_to_principal_drops_the_password() {
    let admin = AdminRecord {
        id: "a1".to_owned(),
        username: "mom".to_owned(),
        password: "hunter2".to_owned(),
        nickname: "Mom".to_owned(),
    };
    let principal = admin.to_principal();
    let serialized = serde_json::to_string(&principal).unwrap();
    assert!(!serialized.contains("hunter2"));
    assert_eq!(principal.extra.get("nickname"), Some(&serde_json::json!("Mom")));
}

#[test]
fn check_in_status_rides_snake_case_on_the_wire() {
    let raw = r#"{"id":"c1","user_id":"u1","task_id":"t1","task_name":"Reading",
                  "duration_minutes":30,"status":"approved","created_at":"2026-08-06T09:00:00Z"}"#;
    let check_in: CheckIn = serde_json::from_str(raw).unwrap();
    assert_eq!(check_in.status, CheckInStatus::Approved);
    assert_eq!(check_in.status.label(), "approved");
}

#[test]
fn check_in_status_defaults_to_pending() {
    let raw = r#"{"id":"c1","user_id":"u1","task_id":"t1","task_name":"Reading","duration_minutes":30}"#;
    let check_in: CheckIn = serde_json::from_str(raw).unwrap();
    assert_eq!(check_in.status, CheckInStatus::Pending);
    assert_eq!(check_in.created_at, "");
}

#[test]
fn study_plan_round_trips_with_weekdays_and_status() {
    let plan = StudyPlan {
        id: "p1".to_owned(),
        name: "Reading".to_owned(),
        icon: "📚".to_owned(),
        description: "Read for 30 minutes".to_owned(),
        weekdays: vec![1, 3, 5],
        time_period: "evening".to_owned(),
        duration_minutes: 30,
        coins_reward: 10,
        exp_reward: 20,
        status: PlanStatus::Paused,
        sort_order: 5,
    };
    let raw = serde_json::to_string(&plan).unwrap();
    assert!(raw.contains(r#""status":"paused""#));
    let back: StudyPlan = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn study_plan_defaults_cover_sparse_rows() {
    let raw = r#"{"id":"p1","name":"Reading","duration_minutes":30,"coins_reward":10,"exp_reward":20}"#;
    let plan: StudyPlan = serde_json::from_str(raw).unwrap();
    assert_eq!(plan.status, PlanStatus::Active);
    assert!(plan.weekdays.is_empty());
}

#[test]
fn wish_status_defaults_to_open() {
    let raw = r#"{"id":"w1","user_id":"u1","name":"Lego set","cost_coins":200}"#;
    let wish: Wish = serde_json::from_str(raw).unwrap();
    assert_eq!(wish.status, WishStatus::Open);
}
