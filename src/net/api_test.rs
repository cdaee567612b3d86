use super::*;
use crate::net::types::PlanStatus;

fn profile(coins: i64, exp: i64) -> Profile {
    Profile {
        id: "p1".to_owned(),
        user_id: "u1".to_owned(),
        username: "mei".to_owned(),
        nickname: "Mei".to_owned(),
        level: 1,
        exp,
        coins,
    }
}

fn plan(coins_reward: i64, exp_reward: i64) -> StudyPlan {
    StudyPlan {
        id: "t1".to_owned(),
        name: "Piano practice".to_owned(),
        icon: "🎹".to_owned(),
        description: String::new(),
        weekdays: Vec::new(),
        time_period: String::new(),
        duration_minutes: 30,
        coins_reward,
        exp_reward,
        status: PlanStatus::Active,
        sort_order: 1,
    }
}

#[test]
fn credited_adds_plan_rewards_to_current_balances() {
    assert_eq!(credited(&profile(100, 40), &plan(15, 30)), (115, 70));
}

#[test]
fn credited_starts_from_zero_for_a_new_child() {
    assert_eq!(credited(&profile(0, 0), &plan(5, 10)), (5, 10));
}

#[test]
fn achievement_seed_has_unique_named_entries() {
    let seed = achievement_seed();
    assert_eq!(seed.len(), 5);

    let mut names: Vec<&str> = seed.iter().filter_map(|a| a["name"].as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 5);

    for record in &seed {
        assert!(record["requirement_value"].as_i64().unwrap() > 0);
    }
}
