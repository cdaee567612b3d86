//! Admin login for the parent area.

#[cfg(test)]
#[path = "admin_login_test.rs"]
mod admin_login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

/// Validate the login form. Both fields are required; surrounding
/// whitespace is ignored.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both name and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate_admin = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate_admin = navigate_admin.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_admin(&name).await {
                    Ok(Some(admin)) if admin.password == pass => {
                        session.update(|s| s.set_admin(admin.to_principal()));
                        navigate_admin("/admin", NavigateOptions::default());
                    }
                    Ok(_) => {
                        info.set("Invalid name or password.".to_owned());
                        busy.set(false);
                    }
                    Err(e) => {
                        info.set(format!("Login failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&name, &pass, &navigate_admin, session);
        }
    };

    view! {
        <div class="admin-login-page">
            <div class="admin-login-page__card">
                <h1>"Parent area"</h1>
                <form class="admin-login-page__form" on:submit=on_submit>
                    <input
                        class="admin-login-page__input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="admin-login-page__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn admin-login-page__submit" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="admin-login-page__message">{move || info.get()}</p>
                </Show>
                <a class="admin-login-page__back" href="/">"Back to child selection"</a>
            </div>
        </div>
    }
}
