//! Grocery List Frontend Entry Point

mod models;
mod api;
mod config;
mod store;
mod sync;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("GroceryList", log::LevelFilter::Debug) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
