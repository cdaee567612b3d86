//! Wish queue: grant wishes children have filed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::wish_card::WishCard;
use crate::net::types::Wish;
use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};

#[component]
pub fn AdminWishesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::admin(), navigate.clone());

    let wishes = RwSignal::new(Vec::<Wish>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_all_wishes().await {
            Ok(list) => wishes.set(list),
            Err(e) => log::warn!("wish list load failed: {e}"),
        }
        loading.set(false);
    });

    let on_grant = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::grant_wish(&id).await {
                Ok(updated) => wishes.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|w| w.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(e) => log::warn!("wish grant failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="admin-wishes-page">
            <a class="admin-wishes-page__back" href="/admin">"← Dashboard"</a>
            <h1>"Wishes"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="admin-wishes-page__list">
                    {move || {
                        wishes
                            .get()
                            .into_iter()
                            .map(|wish| view! { <WishCard wish=wish on_grant=on_grant/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <Show when=move || !loading.get() && wishes.get().is_empty()>
                <p class="admin-wishes-page__empty">"No wishes filed yet."</p>
            </Show>
        </div>
    }
}
