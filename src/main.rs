//! Todo App Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod csrf;
mod error;
mod logger;
mod models;
mod store;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logger::init(config::log_level()) {
        web_sys::console::warn_1(&format!("Console logger not installed: {}", err).into());
    }

    let config = ApiConfig::resolve();
    log::info!("Todo app using API at {}", config.base_url());

    mount_to_body(move || view! { <App config=config /> });
}
