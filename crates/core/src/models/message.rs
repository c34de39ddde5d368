//! Chat message model

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

use crate::config::DEFAULT_TIME_FORMAT;

/// A chat message in the session log.
///
/// Fields are private so a message cannot change after creation; the
/// only constructor is [`MessageLog::append`](crate::MessageLog::append),
/// which guarantees non-empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: Uuid,
    text: String,
    sender: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    pub(crate) fn new(text: String, sender: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display name captured when the message was sent
    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether `name` is the display name this message was sent under
    pub fn is_from(&self, name: &str) -> bool {
        self.sender == name
    }

    /// Format the creation time as local time-of-day.
    ///
    /// [`ChatConfig`](crate::ChatConfig) validates `format` at load time;
    /// a format that still fails to render falls back to the default.
    pub fn format_time(&self, format: &str) -> String {
        let local = self.timestamp.with_timezone(&Local);
        let mut rendered = String::new();
        if write!(rendered, "{}", local.format(format)).is_ok() {
            return rendered;
        }

        tracing::warn!(format = %format, "Unrenderable time format, using default");
        local.format(DEFAULT_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_has_unique_id() {
        let a = Message::new("hi".to_string(), "Alice".to_string());
        let b = Message::new("hi".to_string(), "Alice".to_string());
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_from() {
        let msg = Message::new("hi".to_string(), "Alice".to_string());
        assert!(msg.is_from("Alice"));
        assert!(!msg.is_from("alice"));
        assert!(!msg.is_from("Bob"));
    }

    #[test]
    fn test_format_time_uses_local_time_of_day() {
        let msg = Message::new("hi".to_string(), "Alice".to_string());
        let expected = msg
            .timestamp()
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string();
        assert_eq!(msg.format_time("%H:%M"), expected);
        assert_eq!(msg.format_time("%H:%M").len(), 5);
    }

    #[test]
    fn test_format_time_falls_back_on_unrenderable_format() {
        let msg = Message::new("hi".to_string(), "Alice".to_string());
        assert_eq!(msg.format_time("%#z"), msg.format_time(DEFAULT_TIME_FORMAT));
        assert_eq!(msg.format_time("%Q"), msg.format_time(DEFAULT_TIME_FORMAT));
    }
}
