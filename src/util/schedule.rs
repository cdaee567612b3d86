//! Study-plan scheduling helpers.
//!
//! Plans carry an ISO weekday list (1 = Monday .. 7 = Sunday). The value 0
//! is an ad-hoc marker meaning "runs whichever day it was created", used for
//! one-off plans the admin adds for a single day.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use crate::net::types::StudyPlan;

/// Weekday marker for ad-hoc, run-today plans.
pub const AD_HOC: u8 = 0;

/// Convert a JS `Date.getDay()` value (0 = Sunday) to an ISO weekday.
pub fn iso_weekday_from_js(js_day: u32) -> u8 {
    if js_day == 0 {
        7
    } else {
        u8::try_from(js_day).unwrap_or(7)
    }
}

/// Whether `plan` is scheduled on `iso_weekday`.
///
/// An empty weekday list means the plan runs every day.
pub fn runs_on(plan: &StudyPlan, iso_weekday: u8) -> bool {
    plan.weekdays.is_empty()
        || plan.weekdays.contains(&AD_HOC)
        || plan.weekdays.contains(&iso_weekday)
}

/// Parse a comma-separated weekday list (e.g. `"1,3,5"`) into sorted, deduped
/// ISO weekdays. Non-numeric and out-of-range entries are dropped.
pub fn parse_weekdays(input: &str) -> Vec<u8> {
    let mut days: Vec<u8> = input
        .split(',')
        .filter_map(|part| part.trim().parse::<u8>().ok())
        .filter(|day| *day <= 7)
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Today's ISO weekday (browser clock; callers off the browser see Monday).
pub fn today_iso_weekday() -> u8 {
    #[cfg(feature = "hydrate")]
    {
        iso_weekday_from_js(js_sys::Date::new_0().get_day())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        1
    }
}

/// ISO timestamp for local midnight today, the lower bound for "today's"
/// check-ins.
pub fn today_start_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        now.set_hours(0);
        now.set_minutes(0);
        now.set_seconds(0);
        now.set_milliseconds(0);
        String::from(now.to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
