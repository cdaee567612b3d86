//! Card for one wish, child-side and in the admin queue.

use leptos::prelude::*;

use crate::net::types::{Wish, WishStatus};

/// A wish row. Pass `on_grant` to show the admin's grant button on open
/// wishes.
#[component]
pub fn WishCard(wish: Wish, #[prop(optional)] on_grant: Option<Callback<String>>) -> impl IntoView {
    let granted = wish.status == WishStatus::Granted;
    let on_grant_click = Callback::new({
        let wish_id = wish.id.clone();
        move |()| {
            if let Some(on_grant) = on_grant.as_ref() {
                on_grant.run(wish_id.clone());
            }
        }
    });
    view! {
        <div class="wish-card" class:wish-card--granted=granted>
            <span class="wish-card__name">{wish.name.clone()}</span>
            <span class="wish-card__cost">{format!("{} coins", wish.cost_coins)}</span>
            <span class="wish-card__status">{if granted { "granted" } else { "open" }}</span>
            <Show when=move || !granted && on_grant.is_some()>
                <button class="btn wish-card__grant" on:click=move |_| on_grant_click.run(())>
                    "Grant"
                </button>
            </Show>
        </div>
    }
}
