//! # sprinkle-console
//!
//! Leptos + WASM console for the water-use licensing service.
//!
//! This crate owns the session and route-authorization core: the persisted
//! credential store, identity derivation from the bearer token, the route
//! guard and role-dependent navigation, and the authenticated request
//! dispatcher. Domain views (sensors, users, registration forms) are mounted
//! by the embedding application through `app::ViewRenderer`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(|| leptos::view! { <App/> });
}
