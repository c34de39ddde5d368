//! View model bindings for Slint UI

mod chat;
mod history;
mod profile;

use std::sync::Arc;

use crate::state::AppState;
use crate::MainWindow;

pub fn setup_bindings(window: &MainWindow, state: Arc<AppState>) {
    chat::setup_chat_bindings(window, state.clone());
    profile::setup_profile_bindings(window, state.clone());
    history::setup_history_bindings(window, state.clone());

    // Inputs are two-way bound, so they are only seeded once
    {
        let session = state.session();
        window.set_username(session.sender_name().into());
        window.set_draft(session.draft().into());
    }
    window.invoke_load_messages();
}
