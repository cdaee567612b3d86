//! Wish list for the signed-in child.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::wish_card::WishCard;
use crate::net::types::Wish;
use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};

#[component]
pub fn WishesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::auth(), navigate.clone());

    let wishes = RwSignal::new(Vec::<Wish>::new());
    let name = RwSignal::new(String::new());
    let cost = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let child = session.get_untracked().current_child().cloned();
        if let Some(child) = child {
            leptos::task::spawn_local(async move {
                match crate::net::api::list_wishes(&child.id).await {
                    Ok(list) => wishes.set(list),
                    Err(e) => log::warn!("wish list load failed: {e}"),
                }
            });
        }
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let wish_name = name.get().trim().to_owned();
        if wish_name.is_empty() {
            info.set("Enter a wish first.".to_owned());
            return;
        }
        let Ok(cost_coins) = cost.get().trim().parse::<i64>() else {
            info.set("Enter a coin cost.".to_owned());
            return;
        };
        let Some(child_id) = session.get_untracked().current_child().map(|c| c.id.clone()) else {
            return;
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_wish(&child_id, &wish_name, cost_coins).await {
                Ok(created) => {
                    wishes.update(|list| list.insert(0, created));
                    name.set(String::new());
                    cost.set(String::new());
                }
                Err(e) => {
                    log::warn!("wish create failed: {e}");
                    info.set("Could not save the wish.".to_owned());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (child_id, wish_name, cost_coins);
    };

    view! {
        <div class="wishes-page">
            <a class="wishes-page__back" href="/home">"← Back"</a>
            <h1>"Wishes"</h1>
            <form class="wishes-page__form" on:submit=on_submit>
                <input
                    class="wishes-page__input"
                    type="text"
                    placeholder="I wish for..."
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="wishes-page__input wishes-page__input--cost"
                    type="number"
                    placeholder="Coins"
                    prop:value=move || cost.get()
                    on:input=move |ev| cost.set(event_target_value(&ev))
                />
                <button class="btn wishes-page__submit" type="submit" disabled=move || busy.get()>
                    "Make a wish"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="wishes-page__message">{move || info.get()}</p>
            </Show>
            <div class="wishes-page__list">
                {move || {
                    wishes
                        .get()
                        .into_iter()
                        .map(|wish| view! { <WishCard wish=wish/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
