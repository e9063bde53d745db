//! Student Fee Dashboard Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init() {
        web_sys::console::warn_1(&format!("[APP] Console logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
