//! Message log
//!
//! Ordered, append-only sequence of messages for the current session.
//! Insertion order is display order; the only removal is a bulk clear.

use crate::error::{Error, Result};
use crate::models::Message;

/// Byte order mark. Not Unicode whitespace, but stripped like it.
const BOM: char = '\u{FEFF}';

fn trim_draft(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message with trimmed `text` sent as `sender`.
    ///
    /// Rejects text that is empty after trimming (whitespace and byte
    /// order marks) and leaves the log unchanged.
    pub fn append(&mut self, text: &str, sender: &str) -> Result<&Message> {
        let text = trim_draft(text);
        if text.is_empty() {
            return Err(Error::EmptyMessage);
        }

        let index = self.entries.len();
        self.entries
            .push(Message::new(text.to_string(), sender.to_string()));
        tracing::debug!(len = self.entries.len(), sender = %sender, "Message appended");

        Ok(&self.entries[index])
    }

    /// Remove every message. Clearing an empty log is a no-op.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        tracing::debug!(removed, "Message log cleared");
    }

    /// All messages in insertion order
    pub fn all(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_trims_and_snapshots_sender() {
        let mut log = MessageLog::new();
        let msg = log.append("  hola mundo \n", "Alice").unwrap();
        assert_eq!(msg.text(), "hola mundo");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_append_grows_by_one() {
        let mut log = MessageLog::new();
        for (i, text) in ["a", " b", "c ", "\td\t", "multi\nline"].iter().enumerate() {
            log.append(text, "Alice").unwrap();
            assert_eq!(log.len(), i + 1);
            assert_eq!(log.all()[i].text(), text.trim());
        }
    }

    #[test]
    fn test_append_rejects_blank_text() {
        let mut log = MessageLog::new();
        log.append("keep", "Alice").unwrap();

        for blank in ["", " ", "   ", "\t\n", "\u{3000}"] {
            let result = log.append(blank, "Alice");
            assert!(matches!(result, Err(Error::EmptyMessage)));
            assert_eq!(log.len(), 1);
        }
        assert_eq!(log.all()[0].text(), "keep");
    }

    #[test]
    fn test_append_strips_byte_order_marks() {
        let mut log = MessageLog::new();
        assert!(matches!(log.append("\u{FEFF}", "A"), Err(Error::EmptyMessage)));
        assert!(matches!(log.append(" \u{FEFF}\t", "A"), Err(Error::EmptyMessage)));
        assert!(log.is_empty());

        let msg = log.append("\u{FEFF} hola \u{FEFF}", "A").unwrap();
        assert_eq!(msg.text(), "hola");
    }

    #[test]
    fn test_append_accepts_empty_sender() {
        let mut log = MessageLog::new();
        let msg = log.append("hi", "").unwrap();
        assert_eq!(msg.sender(), "");
    }

    #[test]
    fn test_append_preserves_existing_entries() {
        let mut log = MessageLog::new();
        log.append("first", "Alice").unwrap();
        let before = log.all().to_vec();

        log.append("second", "Bob").unwrap();
        assert_eq!(&log.all()[..1], &before[..]);
        assert_eq!(log.all()[1].text(), "second");
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = MessageLog::new();
        log.append("one", "Alice").unwrap();
        log.append("two", "Bob").unwrap();

        log.clear();
        assert!(log.all().is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut log = MessageLog::new();
        log.clear();
        assert!(log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_sequence_keeps_insertion_order() {
        let mut log = MessageLog::new();
        log.append("hi", "Alice").unwrap();
        assert!(log.append("  ", "Alice").is_err());
        log.append("yo", "Bob").unwrap();

        let texts: Vec<(&str, &str)> = log.all().iter().map(|m| (m.text(), m.sender())).collect();
        assert_eq!(texts, vec![("hi", "Alice"), ("yo", "Bob")]);
    }
}
