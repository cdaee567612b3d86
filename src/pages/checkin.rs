//! Check-in flow for a single plan.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::CheckInReward;
use crate::net::types::StudyPlan;
use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};

#[component]
pub fn CheckInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::auth(), navigate.clone());

    let params = use_params_map();
    let plan = RwSignal::new(None::<StudyPlan>);
    let reward = RwSignal::new(None::<CheckInReward>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let plan_id = params.get_untracked().get("plan_id").unwrap_or_default();
        leptos::task::spawn_local(async move {
            match crate::net::plans::get_plan(&plan_id).await {
                Ok(found) => plan.set(Some(found)),
                Err(e) => {
                    log::warn!("plan load failed: {e}");
                    info.set("This plan is not available.".to_owned());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &params;

    let on_confirm = move |_| {
        if busy.get() {
            return;
        }
        let Some(current) = plan.get() else {
            return;
        };
        let Some(child_id) = session.get().current_child().map(|c| c.id.clone()) else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::check_in(&current, &child_id).await {
                Ok(earned) => reward.set(Some(earned)),
                Err(e) => {
                    log::warn!("check-in failed: {e}");
                    info.set("Check-in failed, try again.".to_owned());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, child_id);
    };

    view! {
        <div class="checkin-page">
            <a class="checkin-page__back" href="/home">"← Back"</a>
            <Show
                when=move || reward.get().is_none()
                fallback=move || {
                    view! {
                        <div class="checkin-page__reward">
                            <h1>"Great job!"</h1>
                            <p class="checkin-page__earned">
                                {move || {
                                    reward
                                        .get()
                                        .map(|r| format!("+{} 🪙  +{} ⭐", r.coins, r.exp))
                                        .unwrap_or_default()
                                }}
                            </p>
                            <a class="btn checkin-page__home" href="/home">"Back home"</a>
                        </div>
                    }
                }
            >
                {move || {
                    plan.get().map(|p| {
                        view! {
                            <div class="checkin-page__card">
                                <span class="checkin-page__icon">{p.icon.clone()}</span>
                                <h1>{p.name.clone()}</h1>
                                <p class="checkin-page__description">{p.description.clone()}</p>
                                <p class="checkin-page__meta">{format!("{} minutes", p.duration_minutes)}</p>
                                <button
                                    class="btn checkin-page__confirm"
                                    disabled=move || busy.get()
                                    on:click=on_confirm
                                >
                                    "Done! Check in"
                                </button>
                            </div>
                        }
                    })
                }}
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="checkin-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
