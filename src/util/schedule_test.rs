use super::*;
use crate::net::types::{PlanStatus, StudyPlan};

fn plan(weekdays: Vec<u8>) -> StudyPlan {
    StudyPlan {
        id: "p1".to_owned(),
        name: "Piano practice".to_owned(),
        icon: "🎹".to_owned(),
        description: String::new(),
        weekdays,
        time_period: String::new(),
        duration_minutes: 30,
        coins_reward: 15,
        exp_reward: 30,
        status: PlanStatus::Active,
        sort_order: 1,
    }
}

#[test]
fn empty_weekdays_runs_every_day() {
    let p = plan(Vec::new());
    for day in 1..=7 {
        assert!(runs_on(&p, day));
    }
}

#[test]
fn scheduled_weekdays_match_exactly() {
    let p = plan(vec![1, 3, 5]);
    assert!(runs_on(&p, 1));
    assert!(!runs_on(&p, 2));
    assert!(runs_on(&p, 5));
    assert!(!runs_on(&p, 7));
}

#[test]
fn ad_hoc_marker_runs_any_day() {
    let p = plan(vec![AD_HOC]);
    assert!(runs_on(&p, 2));
    assert!(runs_on(&p, 7));
}

#[test]
fn js_sunday_maps_to_iso_seven() {
    assert_eq!(iso_weekday_from_js(0), 7);
    assert_eq!(iso_weekday_from_js(1), 1);
    assert_eq!(iso_weekday_from_js(6), 6);
}

#[test]
fn parse_weekdays_sorts_dedups_and_drops_junk() {
    assert_eq!(parse_weekdays("5, 1,3"), vec![1, 3, 5]);
    assert_eq!(parse_weekdays("1,1,2"), vec![1, 2]);
    assert_eq!(parse_weekdays("0"), vec![0]);
    assert_eq!(parse_weekdays("8,abc, 2"), vec![2]);
    assert_eq!(parse_weekdays(""), Vec::<u8>::new());
}
