//! NexaHub Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod models;
mod search;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("NexaHub", config::LOG_CAPACITY, config::LOG_LEVEL) {
        web_sys::console::error_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("[App] starting, api = {:?}", config::API_URL);
    mount_to_body(App);
}
