//! Home screen: today's plans for the signed-in child.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the child's profile,
//! filters the active plans down to the ones scheduled today, and marks the
//! ones already checked in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::level_badge::LevelBadge;
use crate::components::task_card::TaskCard;
use crate::net::types::{Profile, StudyPlan};
use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::auth(), navigate.clone());

    let profile = RwSignal::new(None::<Profile>);
    let today_plans = RwSignal::new(Vec::<StudyPlan>::new());
    let done_ids = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let child = session.get_untracked().current_child().cloned();
        if let Some(child) = child {
            leptos::task::spawn_local(async move {
                let (profile_res, plans_res, today_res) = futures::join!(
                    crate::net::api::get_or_create_profile(&child.id, &child.name),
                    crate::net::plans::get_active_plans(),
                    crate::net::api::get_today_check_ins(&child.id),
                );
                match profile_res {
                    Ok(p) => profile.set(Some(p)),
                    Err(e) => log::warn!("profile load failed: {e}"),
                }
                match plans_res {
                    Ok(all) => {
                        let today = crate::util::schedule::today_iso_weekday();
                        today_plans.set(
                            all.into_iter()
                                .filter(|p| crate::util::schedule::runs_on(p, today))
                                .collect(),
                        );
                    }
                    Err(e) => log::warn!("plan load failed: {e}"),
                }
                match today_res {
                    Ok(list) => done_ids.set(list.into_iter().map(|c| c.task_id).collect()),
                    Err(e) => log::warn!("today's check-ins load failed: {e}"),
                }
                loading.set(false);
            });
        }
    }

    let navigate_checkin = navigate.clone();
    let on_open = Callback::new(move |plan_id: String| {
        navigate_checkin(&format!("/checkin/{plan_id}"), NavigateOptions::default());
    });

    let navigate_out = navigate.clone();
    let on_logout = move |_| {
        session.update(SessionStore::logout);
        navigate_out("/", NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                {move || profile.get().map(|p| view! { <LevelBadge profile=p/> })}
                <nav class="home-page__nav">
                    <a href="/honors">"Honors"</a>
                    <a href="/wishes">"Wishes"</a>
                    <a href="/history">"History"</a>
                    <a href="/report">"Report"</a>
                </nav>
                <button class="btn home-page__logout" on:click=on_logout>"Switch user"</button>
            </header>
            <h2>"Today's plans"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading plans..."</p> }>
                <div class="home-page__plans">
                    {move || {
                        today_plans
                            .get()
                            .into_iter()
                            .map(|plan| {
                                let done = done_ids.get().contains(&plan.id);
                                view! { <TaskCard plan=plan done=done on_open=on_open/> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <Show when=move || !loading.get() && today_plans.get().is_empty()>
                <p class="home-page__empty">"Nothing scheduled today. Enjoy the break!"</p>
            </Show>
        </div>
    }
}
