//! Confirmation gate for clearing the message history
//!
//! Clearing is a two-step action: the gate must be opened first, and
//! either confirming or cancelling closes it again.

use crate::log::MessageLog;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConfirmationGate {
    pending: bool,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.pending
    }

    /// Open the gate. Only possible while `log` has messages.
    ///
    /// Returns whether the gate is open afterward.
    pub fn request_clear(&mut self, log: &MessageLog) -> bool {
        if log.is_empty() {
            tracing::debug!("Clear requested on empty log, ignoring");
        } else {
            self.pending = true;
        }
        self.pending
    }

    /// Clear `log` if the gate is open, then close it.
    ///
    /// Returns whether the log was cleared.
    pub fn confirm(&mut self, log: &mut MessageLog) -> bool {
        let was_open = self.pending;
        if was_open {
            log.clear();
        } else {
            tracing::debug!("Clear confirmed while gate closed, ignoring");
        }
        self.pending = false;
        was_open
    }

    /// Close the gate without touching the log
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}
