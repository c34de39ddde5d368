//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::gate::ConfirmationGate;
use crate::log::MessageLog;

/// Validate that the log holds only non-empty, uniquely keyed messages
pub fn assert_log_invariants(log: &MessageLog) {
    for message in log.all() {
        debug_assert!(
            !message.text().trim().is_empty(),
            "Message {} has empty text",
            message.id()
        );
    }

    if cfg!(debug_assertions) {
        let mut seen = HashSet::with_capacity(log.len());
        for message in log.all() {
            debug_assert!(
                seen.insert(message.id()),
                "Duplicate message id {}",
                message.id()
            );
        }
    }
}

/// Validate that the gate is never open over an empty log
pub fn assert_gate_invariants(gate: &ConfirmationGate, log: &MessageLog) {
    debug_assert!(
        !(gate.is_open() && log.is_empty()),
        "Confirmation gate is open but the log is empty"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_log() {
        let mut log = MessageLog::new();
        log.append("hi", "Alice").unwrap();
        log.append("yo", "Bob").unwrap();
        assert_log_invariants(&log);
    }

    #[test]
    fn test_empty_log() {
        assert_log_invariants(&MessageLog::new());
    }

    #[test]
    fn test_open_gate_over_messages() {
        let mut log = MessageLog::new();
        log.append("hi", "Alice").unwrap();
        let mut gate = ConfirmationGate::new();
        gate.request_clear(&log);
        assert_gate_invariants(&gate, &log);
    }
}
