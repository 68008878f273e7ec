//! Ticket Desk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod navigation;
mod pages;
mod render;
mod session;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_logger::init(console_logger::parse_level(config::LOG_LEVEL)).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    mount_to_body(App);
}
