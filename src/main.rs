pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod estimate;
pub mod i18n;
pub mod operation;
pub mod pages;
pub mod presenter;

#[cfg(test)]
mod testing;

use app::App;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

fn main() {
    // Init logger
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("failed to init logger: {}", e);
    }
    // Init panic hook to avoid Dioxus overlay crashes
    console_error_panic_hook::set_once();

    launch(App);
}
