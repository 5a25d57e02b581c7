//! Typing Indicator - three bouncing dots
//! Built with iced; the demo hosts one indicator on a white card

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

use std::path::PathBuf;

use anyhow::Context;

use features::Settings;
use features::settings::CONFIG_ENV;

/// Load settings from `TYPING_INDICATOR_CONFIG` if set, else the default location
fn load_settings() -> anyhow::Result<Settings> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            Settings::load_from_file(&path)
                .with_context(|| format!("failed to load settings from {}", path.display()))
        }
        None => Ok(Settings::load()),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = load_settings()?;
    tracing::info!("Starting with {:?}", settings.indicator);

    iced::application(
        move || app::App::new(settings.clone()),
        app::App::update,
        app::App::view,
    )
    .title("Typing Indicator")
    .subscription(app::App::subscription)
    .window_size(iced::Size::new(360.0, 240.0))
    .antialiasing(true)
    .run()?;

    Ok(())
}
