//! Client Board Frontend Entry Point

mod app;
mod collection;
mod components;
mod context;

use app::App;
use leptos::prelude::*;

/// Records kept in the in-memory diagnostic ring
const LOG_CAPACITY: usize = 500;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger(LOG_CAPACITY, tracing::Level::INFO) {
        web_sys::console::error_1(&format!("failed to init rolling logger: {}", e).into());
    }
    mount_to_body(App);
}
