//! Achievement wall for the signed-in child.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Achievement;
use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};

/// Whether the child has unlocked `achievement`.
///
/// Only total check-in requirements are evaluated client-side; streak and
/// per-plan requirements render locked until there is server support for
/// computing them.
fn is_unlocked(achievement: &Achievement, total_check_ins: usize) -> bool {
    achievement.requirement_type == "total_checkins"
        && i64::try_from(total_check_ins).unwrap_or(i64::MAX) >= achievement.requirement_value
}

#[component]
pub fn HonorsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::auth(), navigate.clone());

    let achievements = RwSignal::new(Vec::<Achievement>::new());
    let total = RwSignal::new(0usize);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let child = session.get_untracked().current_child().cloned();
        if let Some(child) = child {
            leptos::task::spawn_local(async move {
                let (catalog_res, history_res) = futures::join!(
                    crate::net::api::get_achievements(),
                    crate::net::api::list_check_ins(&child.id),
                );
                match catalog_res {
                    Ok(list) => achievements.set(list),
                    Err(e) => log::warn!("achievement load failed: {e}"),
                }
                match history_res {
                    Ok(list) => total.set(list.len()),
                    Err(e) => log::warn!("check-in history load failed: {e}"),
                }
                loading.set(false);
            });
        }
    }

    view! {
        <div class="honors-page">
            <a class="honors-page__back" href="/home">"← Back"</a>
            <h1>"Honors"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="honors-page__grid">
                    {move || {
                        let check_ins_so_far = total.get();
                        achievements
                            .get()
                            .into_iter()
                            .map(|a| {
                                let unlocked = is_unlocked(&a, check_ins_so_far);
                                view! {
                                    <div class="honor-card" class:honor-card--unlocked=unlocked>
                                        <span class="honor-card__icon">{a.icon.clone()}</span>
                                        <span class="honor-card__name">{a.name.clone()}</span>
                                        <span class="honor-card__description">{a.description.clone()}</span>
                                        <span class="honor-card__state">
                                            {if unlocked { "unlocked" } else { "locked" }}
                                        </span>
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
