// The browser-facing modules only build for wasm32; on the host target the
// core (config, API client, validators, form controllers) still compiles so
// its unit tests run natively. The host binary itself has an empty `main`.
#![cfg_attr(not(any(target_arch = "wasm32", test)), allow(dead_code))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = app_lib::config::AppConfig::load();
    app_lib::telemetry::init(&config.log_level);
    tracing::info!(
        api_base_url = %config.api_base_url,
        commit = app_lib::build_info::git_commit_hash(),
        "starting Basic App"
    );

    mount_to_body(move || view! { <App config=config /> });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
