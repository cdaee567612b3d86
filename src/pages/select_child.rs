//! Child-selection entry screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route and the redirect target for
//! unauthenticated navigation. Picking a child turns its profile into the
//! session principal and moves to the home screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Profile;
use crate::state::session::SessionStore;

#[component]
pub fn SelectChildPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();

    let children = RwSignal::new(Vec::<Profile>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_children().await {
            Ok(list) => children.set(list),
            Err(e) => log::warn!("child list load failed: {e}"),
        }
        loading.set(false);
    });

    let navigate_home = navigate.clone();
    let on_pick = Callback::new(move |profile: Profile| {
        session.update(|s| s.set_child(profile.to_principal()));
        navigate_home("/home", NavigateOptions::default());
    });

    view! {
        <div class="select-child-page">
            <h1>"Sprout"</h1>
            <p class="select-child-page__subtitle">"Who is checking in today?"</p>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="select-child-page__grid">
                    {move || {
                        children
                            .get()
                            .into_iter()
                            .map(|profile| {
                                let label = format!("{} · Lv {}", profile.nickname, profile.level);
                                let pick = profile.clone();
                                view! {
                                    <button
                                        class="select-child-page__child"
                                        on:click=move |_| on_pick.run(pick.clone())
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <Show when=move || !loading.get() && children.get().is_empty()>
                <p class="select-child-page__empty">"No children yet. Ask a parent to add one."</p>
            </Show>
            <a class="select-child-page__admin-link" href="/admin/login">"Parent area"</a>
        </div>
    }
}
