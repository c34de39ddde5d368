//! Chat session controller
//!
//! Owns the message log, the composer and the confirmation gate for one
//! session. UI bindings call into this and re-render from its read
//! accessors; nothing else mutates chat state.

use crate::composer::Composer;
use crate::config::ChatConfig;
use crate::gate::ConfirmationGate;
use crate::invariants::{assert_gate_invariants, assert_log_invariants};
use crate::log::MessageLog;
use crate::models::{Message, MessageView};

#[derive(Debug)]
pub struct ChatSession {
    log: MessageLog,
    composer: Composer,
    gate: ConfirmationGate,
    time_format: String,
}

impl ChatSession {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            log: MessageLog::new(),
            composer: Composer::new(config.display_name.clone()),
            gate: ConfirmationGate::new(),
            time_format: config.time_format.clone(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.log.all()
    }

    pub fn draft(&self) -> &str {
        self.composer.draft()
    }

    pub fn sender_name(&self) -> &str {
        self.composer.sender_name()
    }

    pub fn avatar_initial(&self) -> String {
        self.composer.avatar_initial()
    }

    /// Whether the clear-history action should be offered
    pub fn can_clear(&self) -> bool {
        !self.log.is_empty()
    }

    pub fn is_clear_pending(&self) -> bool {
        self.gate.is_open()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.composer.set_draft(text);
    }

    pub fn set_sender_name(&mut self, name: impl Into<String>) {
        self.composer.set_sender_name(name);
    }

    /// Submit the draft. Returns whether a message was appended.
    pub fn submit(&mut self) -> bool {
        let sent = self.composer.submit(&mut self.log).is_some();
        if sent {
            tracing::info!(count = self.log.len(), "Message sent");
        }
        self.check_invariants();
        sent
    }

    pub fn request_clear(&mut self) -> bool {
        let open = self.gate.request_clear(&self.log);
        self.check_invariants();
        open
    }

    /// Confirm a pending clear. Returns whether the log was cleared.
    pub fn confirm_clear(&mut self) -> bool {
        let cleared = self.gate.confirm(&mut self.log);
        if cleared {
            tracing::info!("History cleared");
        }
        self.check_invariants();
        cleared
    }

    pub fn cancel_clear(&mut self) {
        self.gate.cancel();
        self.check_invariants();
    }

    /// Messages projected for display against the current display name
    pub fn views(&self) -> Vec<MessageView> {
        let current = self.composer.sender_name();
        self.log
            .all()
            .iter()
            .map(|m| MessageView::new(m, current, &self.time_format))
            .collect()
    }

    fn check_invariants(&self) {
        assert_log_invariants(&self.log);
        assert_gate_invariants(&self.gate, &self.log);
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}
