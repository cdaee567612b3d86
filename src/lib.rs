//! # sprout
//!
//! Leptos + WASM client for the Sprout family task tracker: children check
//! in on recurring study plans, earn coins and experience, unlock
//! achievements, and a parent reviews check-ins and manages plans, children,
//! and wishes.
//!
//! The app is a thin client-side router and state layer over two hosted
//! backends; all persistence is remote except the login session, which is
//! mirrored to `localStorage` so reloads keep the signed-in identity.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire up panic/log output and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    net::config::warn_if_unconfigured();
    leptos::mount::hydrate_body(app::App);
}
