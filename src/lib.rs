//! # student-portal
//!
//! Leptos + WASM single-page client for the student portal.
//!
//! The root [`app::App`] component resolves the current browser path against
//! a fixed route table (`routes`) and renders one page view (`pages`). Shared
//! state lives in `state`; browser persistence and the session hook live in
//! `util`.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM start function: installs logging and mounts the app to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let (config, config_error) = match config::AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };
    if let Err(e) = console_log::init_with_level(config.log_level) {
        // Only fails when a logger is already installed; that logger keeps receiving records.
        log::debug!("console logger not installed: {e}");
    }
    if let Some(e) = config_error {
        log::warn!("build config rejected, using defaults: {e}");
    }

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
