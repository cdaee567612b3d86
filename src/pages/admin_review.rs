//! Review queue: approve or reject pending check-ins.
//!
//! The queue refreshes on a timer so check-ins children file while the page
//! is open show up without a reload.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::CheckIn;
use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};

#[component]
pub fn AdminReviewPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::admin(), navigate.clone());

    let pending = RwSignal::new(Vec::<CheckIn>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            refresh_pending(pending).await;
            loading.set(false);
        });

        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(10)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh_pending(pending).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_review = Callback::new(move |(id, approved): (String, bool)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::review_check_in(&id, approved).await {
                Ok(reviewed) => pending.update(|list| list.retain(|c| c.id != reviewed.id)),
                Err(e) => log::warn!("review failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, approved);
    });

    view! {
        <div class="admin-review-page">
            <a class="admin-review-page__back" href="/admin">"← Dashboard"</a>
            <h1>"Pending check-ins"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="admin-review-page__list">
                    {move || {
                        pending
                            .get()
                            .into_iter()
                            .map(|check_in| {
                                let approve_id = check_in.id.clone();
                                let reject_id = check_in.id.clone();
                                let day: String = check_in.created_at.chars().take(10).collect();
                                view! {
                                    <div class="review-row">
                                        <span class="review-row__day">{day}</span>
                                        <span class="review-row__name">{check_in.task_name.clone()}</span>
                                        <span class="review-row__minutes">
                                            {format!("{} min", check_in.duration_minutes)}
                                        </span>
                                        <button
                                            class="btn review-row__approve"
                                            on:click=move |_| on_review.run((approve_id.clone(), true))
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            class="btn review-row__reject"
                                            on:click=move |_| on_review.run((reject_id.clone(), false))
                                        >
                                            "Reject"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <Show when=move || !loading.get() && pending.get().is_empty()>
                <p class="admin-review-page__empty">"All caught up."</p>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn refresh_pending(pending: RwSignal<Vec<CheckIn>>) {
    match crate::net::api::list_pending_check_ins().await {
        Ok(list) => pending.set(list),
        Err(e) => log::warn!("pending review load failed: {e}"),
    }
}
