//! Admin dashboard: overview counts, links, and one-shot setup actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::admin(), navigate.clone());

    let children_count = RwSignal::new(0usize);
    let pending_count = RwSignal::new(0usize);
    let plan_count = RwSignal::new(0usize);
    let info = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (children_res, pending_res, plans_res) = futures::join!(
            crate::net::api::list_children(),
            crate::net::api::list_pending_check_ins(),
            crate::net::plans::list_plans(),
        );
        match children_res {
            Ok(list) => children_count.set(list.len()),
            Err(e) => log::warn!("child list load failed: {e}"),
        }
        match pending_res {
            Ok(list) => pending_count.set(list.len()),
            Err(e) => log::warn!("pending review load failed: {e}"),
        }
        match plans_res {
            Ok(list) => plan_count.set(list.len()),
            Err(e) => log::warn!("plan list load failed: {e}"),
        }
    });

    let on_seed_plans = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::plans::seed_plans().await {
                Ok(()) => info.set("Default plans created.".to_owned()),
                Err(e) => info.set(format!("Seeding plans failed: {e}")),
            }
        });
    };

    let on_seed_achievements = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::seed_achievements().await {
                Ok(()) => info.set("Achievement catalog created.".to_owned()),
                Err(e) => info.set(format!("Seeding achievements failed: {e}")),
            }
        });
    };

    let navigate_out = navigate.clone();
    let on_logout = move |_| {
        session.update(SessionStore::logout);
        navigate_out("/", NavigateOptions::default());
    };

    view! {
        <div class="admin-dashboard-page">
            <header class="admin-dashboard-page__header">
                <h1>"Parent dashboard"</h1>
                <button class="btn admin-dashboard-page__logout" on:click=on_logout>"Sign out"</button>
            </header>
            <div class="admin-dashboard-page__stats">
                <span class="admin-dashboard-page__stat">
                    {move || format!("{} children", children_count.get())}
                </span>
                <span class="admin-dashboard-page__stat">
                    {move || format!("{} pending reviews", pending_count.get())}
                </span>
                <span class="admin-dashboard-page__stat">
                    {move || format!("{} plans", plan_count.get())}
                </span>
            </div>
            <nav class="admin-dashboard-page__nav">
                <a href="/admin/reviews">"Reviews"</a>
                <a href="/admin/children">"Children"</a>
                <a href="/admin/plans">"Plans"</a>
                <a href="/admin/wishes">"Wishes"</a>
            </nav>
            <div class="admin-dashboard-page__setup">
                <button class="btn" on:click=on_seed_plans>"Seed default plans"</button>
                <button class="btn" on:click=on_seed_achievements>"Seed achievements"</button>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="admin-dashboard-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
