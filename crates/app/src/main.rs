//! PrivateChat - local chat mockup
//!
//! A single-window desktop chat where messages live only in memory for
//! the lifetime of the process.

use std::sync::Arc;

use slint::ComponentHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod state;
mod viewmodel;

slint::include_modules!();

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting PrivateChat");

    // Initialize application state
    let app_state = Arc::new(state::AppState::load());
    tracing::debug!(
        display_name = %app_state.config().display_name,
        time_format = %app_state.config().time_format,
        "Session initialized"
    );

    // Create main window
    let main_window = match MainWindow::new() {
        Ok(window) => window,
        Err(e) => {
            tracing::error!("Failed to create main window: {}", e);
            std::process::exit(1);
        }
    };

    // Set up view model bindings
    viewmodel::setup_bindings(&main_window, app_state);

    // Run the application
    if let Err(e) = main_window.run() {
        tracing::error!("Event loop failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("PrivateChat closed, session discarded");
}
