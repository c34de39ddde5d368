//! Chat view model

use std::rc::Rc;
use std::sync::Arc;

use privatechat_core::ChatSession;
use slint::{ComponentHandle, ModelRc, VecModel};

use crate::state::AppState;
use crate::MainWindow;
use crate::MessageItem;

/// Build list rows for the current session
pub(super) fn message_items(session: &ChatSession) -> Vec<MessageItem> {
    session
        .views()
        .into_iter()
        .map(|view| MessageItem {
            id: view.id.into(),
            sender_name: view.sender.into(),
            content: view.text.into(),
            timestamp: view.time.into(),
            is_own: view.is_own,
        })
        .collect()
}

pub fn setup_chat_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Load messages and everything derived from the session
    let state_load = state.clone();
    let window_weak = window.as_weak();
    window.on_load_messages(move || {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        let session = state_load.session();
        let items = message_items(&session);

        w.set_messages(ModelRc::from(Rc::new(VecModel::from(items))));
        w.set_has_messages(session.can_clear());
        w.set_avatar_initial(session.avatar_initial().into());
        w.set_show_clear_modal(session.is_clear_pending());
    });

    // Draft edited
    let state_draft = state.clone();
    window.on_draft_edited(move |text| {
        state_draft.session().set_draft(text.as_str());
    });

    // Send message
    let state_send = state.clone();
    let window_weak = window.as_weak();
    window.on_send_message(move || {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        // The input is bound two-way; take its text in case no edit
        // callback fired for the last change
        let sent = {
            let mut session = state_send.session();
            session.set_draft(w.get_draft().as_str());
            session.submit()
        };

        // Blank drafts stay in the input untouched
        if !sent {
            return;
        }

        w.set_draft(state_send.session().draft().into());
        w.invoke_load_messages();
    });
}
