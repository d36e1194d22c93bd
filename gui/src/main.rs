// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting GraphiQL toolbar (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Successfully loaded default configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load default configuration: {}. Exiting.", e);
            // The embedded config ships with the binary; failing to parse it is a build defect.
            panic!("Failed to load critical default configuration: {}", e);
        }
    };

    tracing::info!(
        "Toolbar mode {:?}, default layout {:?}",
        app_config.app.toolbar_mode,
        app_config.toolbar.layout
    );

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(app_config.app.width, app_config.app.height)),
    );

    // AppConfig is handed to the root as context; App provides the rest.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    tracing::info!("GraphiQL toolbar finished.");
}
