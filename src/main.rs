//! Budget Lunch Frontend Entry Point

mod browser;
mod context;
mod store;
mod host;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) keeps the first subscriber and its buffer
    let logs = console_logger::init_logger("BudgetLunch", tracing::Level::DEBUG).ok();
    mount_to_body(move || {
        if let Some(logs) = logs.clone() {
            provide_context(logs);
        }
        view! { <App /> }
    });
}
