//! Plan management: create plans, pause and resume them.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{PlanStatus, StudyPlan};
use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};
use crate::util::schedule;

#[component]
pub fn AdminPlansPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::admin(), navigate.clone());

    let plans = RwSignal::new(Vec::<StudyPlan>::new());
    let name = RwSignal::new(String::new());
    let icon = RwSignal::new(String::new());
    let weekdays = RwSignal::new(String::new());
    let minutes = RwSignal::new(String::new());
    let coins = RwSignal::new(String::new());
    let exp = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::plans::list_plans().await {
            Ok(list) => plans.set(list),
            Err(e) => log::warn!("plan list load failed: {e}"),
        }
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let plan_name = name.get().trim().to_owned();
        if plan_name.is_empty() {
            info.set("Enter a plan name.".to_owned());
            return;
        }
        let record = serde_json::json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "name": plan_name,
            "icon": icon.get().trim(),
            "description": "",
            "weekdays": schedule::parse_weekdays(&weekdays.get()),
            "time_period": "",
            "duration_minutes": minutes.get().trim().parse::<i64>().unwrap_or(20),
            "coins_reward": coins.get().trim().parse::<i64>().unwrap_or(10),
            "exp_reward": exp.get().trim().parse::<i64>().unwrap_or(20),
            "status": PlanStatus::Active,
            "sort_order": plans.get_untracked().len() + 1,
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::plans::create_plan(&record).await {
                Ok(created) => {
                    plans.update(|list| list.push(created));
                    name.set(String::new());
                    icon.set(String::new());
                    weekdays.set(String::new());
                    minutes.set(String::new());
                    coins.set(String::new());
                    exp.set(String::new());
                    info.set(String::new());
                }
                Err(e) => {
                    log::warn!("plan create failed: {e}");
                    info.set("Could not create the plan.".to_owned());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = record;
    };

    let on_toggle = Callback::new(move |(id, status): (String, PlanStatus)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::plans::set_plan_status(&id, status).await {
                Ok(updated) => plans.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|p| p.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(e) => log::warn!("plan status change failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, status);
    });

    view! {
        <div class="admin-plans-page">
            <a class="admin-plans-page__back" href="/admin">"← Dashboard"</a>
            <h1>"Plans"</h1>
            <form class="admin-plans-page__form" on:submit=on_create>
                <input
                    class="admin-plans-page__input"
                    type="text"
                    placeholder="Plan name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="admin-plans-page__input admin-plans-page__input--icon"
                    type="text"
                    placeholder="Icon"
                    prop:value=move || icon.get()
                    on:input=move |ev| icon.set(event_target_value(&ev))
                />
                <input
                    class="admin-plans-page__input"
                    type="text"
                    placeholder="Weekdays (1-7, blank = daily)"
                    prop:value=move || weekdays.get()
                    on:input=move |ev| weekdays.set(event_target_value(&ev))
                />
                <input
                    class="admin-plans-page__input"
                    type="number"
                    placeholder="Minutes"
                    prop:value=move || minutes.get()
                    on:input=move |ev| minutes.set(event_target_value(&ev))
                />
                <input
                    class="admin-plans-page__input"
                    type="number"
                    placeholder="Coins"
                    prop:value=move || coins.get()
                    on:input=move |ev| coins.set(event_target_value(&ev))
                />
                <input
                    class="admin-plans-page__input"
                    type="number"
                    placeholder="Exp"
                    prop:value=move || exp.get()
                    on:input=move |ev| exp.set(event_target_value(&ev))
                />
                <button class="btn admin-plans-page__submit" type="submit">"Add plan"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="admin-plans-page__message">{move || info.get()}</p>
            </Show>
            <div class="admin-plans-page__list">
                {move || {
                    plans
                        .get()
                        .into_iter()
                        .map(|plan| {
                            let toggle_id = plan.id.clone();
                            let active = plan.status == PlanStatus::Active;
                            let next = if active { PlanStatus::Paused } else { PlanStatus::Active };
                            let days_label = if plan.weekdays.is_empty() {
                                "daily".to_owned()
                            } else {
                                plan.weekdays
                                    .iter()
                                    .map(ToString::to_string)
                                    .collect::<Vec<_>>()
                                    .join(",")
                            };
                            view! {
                                <div class="plan-row" class:plan-row--paused=!active>
                                    <span class="plan-row__icon">{plan.icon.clone()}</span>
                                    <span class="plan-row__name">{plan.name.clone()}</span>
                                    <span class="plan-row__days">{days_label}</span>
                                    <span class="plan-row__reward">
                                        {format!("+{} 🪙 +{} ⭐", plan.coins_reward, plan.exp_reward)}
                                    </span>
                                    <button
                                        class="btn plan-row__toggle"
                                        on:click=move |_| on_toggle.run((toggle_id.clone(), next))
                                    >
                                        {if active { "Pause" } else { "Resume" }}
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
