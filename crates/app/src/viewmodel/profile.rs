//! Display name view model

use std::sync::Arc;

use slint::ComponentHandle;

use crate::state::AppState;
use crate::MainWindow;

pub fn setup_profile_bindings(window: &MainWindow, state: Arc<AppState>) {
    let state_name = state.clone();
    let window_weak = window.as_weak();
    window.on_username_edited(move |name| {
        state_name.session().set_sender_name(name.as_str());
        tracing::debug!(name = %name, "Display name changed");

        // Own/other alignment is keyed on the current name, so re-render
        if let Some(w) = window_weak.upgrade() {
            w.invoke_load_messages();
        }
    });
}
