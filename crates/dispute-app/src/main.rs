//! Dispute Intake Application
//!
//! Collects a name, an email and a document, and posts them to the intake
//! endpoint. Runs as a desktop window or in the browser.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod picker;
mod state;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dispute=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting dispute intake...");

    let config = dioxus::desktop::Config::new().with_window(
        dioxus::desktop::WindowBuilder::new()
            .with_title("Dispute Intake")
            .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 640.0)),
    );
    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    tracing::info!("Starting dispute intake in the browser...");
    dioxus::LaunchBuilder::web().launch(app::App);
}
