//! Check-in history for the signed-in child.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::CheckIn;
use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};

#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::auth(), navigate.clone());

    let check_ins = RwSignal::new(Vec::<CheckIn>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let child = session.get_untracked().current_child().cloned();
        if let Some(child) = child {
            leptos::task::spawn_local(async move {
                match crate::net::api::list_check_ins(&child.id).await {
                    Ok(list) => check_ins.set(list),
                    Err(e) => log::warn!("check-in history load failed: {e}"),
                }
                loading.set(false);
            });
        }
    }

    view! {
        <div class="history-page">
            <a class="history-page__back" href="/home">"← Back"</a>
            <h1>"History"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="history-page__list">
                    {move || {
                        check_ins
                            .get()
                            .into_iter()
                            .map(|check_in| {
                                let day: String = check_in.created_at.chars().take(10).collect();
                                view! {
                                    <div class="history-row">
                                        <span class="history-row__day">{day}</span>
                                        <span class="history-row__name">{check_in.task_name.clone()}</span>
                                        <span class="history-row__minutes">
                                            {format!("{} min", check_in.duration_minutes)}
                                        </span>
                                        <span class="history-row__status">{check_in.status.label()}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <Show when=move || !loading.get() && check_ins.get().is_empty()>
                <p class="history-page__empty">"No check-ins yet."</p>
            </Show>
        </div>
    }
}
