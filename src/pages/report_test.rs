use super::*;

fn check_in(name: &str, minutes: i64, status: CheckInStatus) -> CheckIn {
    CheckIn {
        id: "c1".to_owned(),
        user_id: "u1".to_owned(),
        task_id: "t1".to_owned(),
        task_name: name.to_owned(),
        duration_minutes: minutes,
        status,
        created_at: String::new(),
    }
}

#[test]
fn summarize_empty_history_is_all_zeroes() {
    let summary = summarize(&[]);
    assert_eq!(summary, ReportSummary::default());
}

#[test]
fn summarize_totals_minutes_and_approvals() {
    let history = [
        check_in("Reading", 30, CheckInStatus::Approved),
        check_in("Piano practice", 30, CheckInStatus::Pending),
        check_in("Reading", 30, CheckInStatus::Rejected),
    ];
    let summary = summarize(&history);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.approved, 1);
    assert_eq!(summary.minutes, 90);
}

#[test]
fn summarize_orders_plans_by_count_then_name() {
    let history = [
        check_in("Reading", 30, CheckInStatus::Approved),
        check_in("Reading", 30, CheckInStatus::Approved),
        check_in("Singing", 15, CheckInStatus::Approved),
        check_in("Math drills", 20, CheckInStatus::Approved),
    ];
    let summary = summarize(&history);
    assert_eq!(
        summary.per_plan,
        vec![
            ("Reading".to_owned(), 2),
            ("Math drills".to_owned(), 1),
            ("Singing".to_owned(), 1),
        ]
    );
}
