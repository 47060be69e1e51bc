//! # spheremedia
//!
//! Leptos + WASM landing site for the Spheremedia branding agency.
//!
//! The page is a single client-side-rendered view: a hero that "launches" the
//! rest of the sections, static content rendered from [`content`], a contact
//! form with a keyword-driven brief generator, and a floating SphereBot chat
//! widget. A particle field from the `canvas` crate animates behind it all.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`app`] | Root component and context providers |
//! | [`components`] | Page sections and floating widgets |
//! | [`config`] | Build-time endpoint configuration and UI delays |
//! | [`content`] | Static copy: services, portfolio, client ratings |
//! | [`net`] | Generative-text client and assist personas |
//! | [`state`] | Plain-data state machines behind each component |
//! | [`util`] | Browser timers and scrolling |
//!
//! Browser-only code sits behind the `csr` feature; without it the crate
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console_log already installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
