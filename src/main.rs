//! Todo Form Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod models;
mod reducer;
mod render;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = logger::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[APP] console logger not installed: {}", err).into());
    }
    let config = config::load_config();
    log::set_max_level(config.log_level);
    log::info!(target: "app", "mounting todo form");

    mount_to_body(move || view! { <App config=config /> });
}
