//! Child management: create profiles and adjust coin balances.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Profile;
use crate::state::session::SessionStore;
use crate::util::guard::{RouteRequirements, install_route_guard};

#[component]
pub fn AdminChildrenPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    install_route_guard(session, RouteRequirements::admin(), navigate.clone());

    let children = RwSignal::new(Vec::<Profile>::new());
    let username = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_children().await {
            Ok(list) => children.set(list),
            Err(e) => log::warn!("child list load failed: {e}"),
        }
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let login = username.get().trim().to_owned();
        let display = nickname.get().trim().to_owned();
        if login.is_empty() || display.is_empty() {
            info.set("Enter both a login name and a nickname.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_child(&login, &display).await {
                Ok(created) => {
                    children.update(|list| list.push(created));
                    username.set(String::new());
                    nickname.set(String::new());
                    info.set(String::new());
                }
                Err(e) => {
                    log::warn!("child create failed: {e}");
                    info.set("Could not create the child.".to_owned());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (login, display);
    };

    let on_adjust = Callback::new(move |(id, delta): (String, i64)| {
        let Some(current) = children.get_untracked().into_iter().find(|p| p.id == id) else {
            return;
        };
        let coins = (current.coins + delta).max(0);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_child(&id, &serde_json::json!({ "coins": coins })).await {
                Ok(updated) => children.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|p| p.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(e) => log::warn!("coin adjust failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, coins);
    });

    view! {
        <div class="admin-children-page">
            <a class="admin-children-page__back" href="/admin">"← Dashboard"</a>
            <h1>"Children"</h1>
            <form class="admin-children-page__form" on:submit=on_create>
                <input
                    class="admin-children-page__input"
                    type="text"
                    placeholder="Login name"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="admin-children-page__input"
                    type="text"
                    placeholder="Nickname"
                    prop:value=move || nickname.get()
                    on:input=move |ev| nickname.set(event_target_value(&ev))
                />
                <button class="btn admin-children-page__submit" type="submit">"Add child"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="admin-children-page__message">{move || info.get()}</p>
            </Show>
            <div class="admin-children-page__list">
                {move || {
                    children
                        .get()
                        .into_iter()
                        .map(|profile| {
                            let plus_id = profile.id.clone();
                            let minus_id = profile.id.clone();
                            view! {
                                <div class="child-row">
                                    <span class="child-row__nickname">{profile.nickname.clone()}</span>
                                    <span class="child-row__username">{profile.username.clone()}</span>
                                    <span class="child-row__level">{format!("Lv {}", profile.level)}</span>
                                    <span class="child-row__coins">{format!("🪙 {}", profile.coins)}</span>
                                    <button
                                        class="btn child-row__plus"
                                        on:click=move |_| on_adjust.run((plus_id.clone(), 10))
                                    >
                                        "+10"
                                    </button>
                                    <button
                                        class="btn child-row__minus"
                                        on:click=move |_| on_adjust.run((minus_id.clone(), -10))
                                    >
                                        "-10"
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
