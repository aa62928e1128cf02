//! # trainflow-client
//!
//! Leptos front end for TrainFlow, a multi-tenant training and compliance
//! management application: authenticated dashboards with role-gated routes,
//! a bilingual (English/Arabic, RTL) marketing landing page, and local-only
//! integration management pages.
//!
//! The crate is compiled twice: as WASM with `hydrate` for the browser and
//! as an `rlib` with `ssr` for the Axum host in `server/`.

pub mod app;
pub mod components;
pub mod i18n;
pub mod mock;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
