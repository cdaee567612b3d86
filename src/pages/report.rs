//! Practice report summarizing the child's check-in history.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{CheckIn, CheckInStatus};
use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};

/// Aggregates shown on the report page.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ReportSummary {
    pub total: usize,
    pub approved: usize,
    pub minutes: i64,
    pub per_plan: Vec<(String, usize)>,
}

/// Roll up `check_ins` into the report aggregates. Plans sort by count,
/// then name, so ties render stably.
pub(crate) fn summarize(check_ins: &[CheckIn]) -> ReportSummary {
    let mut per_plan: Vec<(String, usize)> = Vec::new();
    for check_in in check_ins {
        match per_plan.iter_mut().find(|(name, _)| *name == check_in.task_name) {
            Some((_, count)) => *count += 1,
            None => per_plan.push((check_in.task_name.clone(), 1)),
        }
    }
    per_plan.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ReportSummary {
        total: check_ins.len(),
        approved: check_ins
            .iter()
            .filter(|c| c.status == CheckInStatus::Approved)
            .count(),
        minutes: check_ins.iter().map(|c| c.duration_minutes).sum(),
        per_plan,
    }
}

#[component]
pub fn ReportPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::auth(), navigate.clone());

    let summary = RwSignal::new(ReportSummary::default());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let child = session.get_untracked().current_child().cloned();
        if let Some(child) = child {
            leptos::task::spawn_local(async move {
                match crate::net::api::list_check_ins(&child.id).await {
                    Ok(list) => summary.set(summarize(&list)),
                    Err(e) => log::warn!("check-in history load failed: {e}"),
                }
                loading.set(false);
            });
        }
    }

    view! {
        <div class="report-page">
            <a class="report-page__back" href="/home">"← Back"</a>
            <h1>"Report"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="report-page__stats">
                    <span class="report-page__stat">
                        {move || format!("{} check-ins", summary.get().total)}
                    </span>
                    <span class="report-page__stat">
                        {move || format!("{} approved", summary.get().approved)}
                    </span>
                    <span class="report-page__stat">
                        {move || format!("{} minutes practiced", summary.get().minutes)}
                    </span>
                </div>
                <div class="report-page__breakdown">
                    {move || {
                        summary
                            .get()
                            .per_plan
                            .into_iter()
                            .map(|(plan_name, count)| {
                                view! {
                                    <div class="report-row">
                                        <span class="report-row__name">{plan_name}</span>
                                        <span class="report-row__count">{format!("{count}×")}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
