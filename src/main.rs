//! Tamil Nadu Tourist Guide Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod guard;
mod models;
mod pages;
mod routes;
mod session;
mod store;

use app::App;
use config::GuideConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = GuideConfig::from_build_env();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    log::info!("[APP] Starting guide, API at {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
