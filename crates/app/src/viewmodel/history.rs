//! Clear-history view model

use std::sync::Arc;

use slint::ComponentHandle;

use crate::state::AppState;
use crate::MainWindow;

pub fn setup_history_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Open the confirmation modal
    let state_request = state.clone();
    let window_weak = window.as_weak();
    window.on_request_clear(move || {
        let open = state_request.session().request_clear();
        if let Some(w) = window_weak.upgrade() {
            w.set_show_clear_modal(open);
        }
    });

    // Confirm: clear and close
    let state_confirm = state.clone();
    let window_weak = window.as_weak();
    window.on_confirm_clear(move || {
        state_confirm.session().confirm_clear();
        if let Some(w) = window_weak.upgrade() {
            w.invoke_load_messages();
        }
    });

    // Cancel: close only
    let state_cancel = state.clone();
    let window_weak = window.as_weak();
    window.on_cancel_clear(move || {
        state_cancel.session().cancel_clear();
        if let Some(w) = window_weak.upgrade() {
            w.set_show_clear_modal(false);
        }
    });
}
