//! Display projection of messages

use super::Message;

/// A message as the message list renders it, relative to the current
/// display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub time: String,
    /// Sent under the current display name (right-aligned)
    pub is_own: bool,
}

impl MessageView {
    pub fn new(message: &Message, current_name: &str, time_format: &str) -> Self {
        Self {
            id: message.id().to_string(),
            sender: message.sender().to_string(),
            text: message.text().to_string(),
            time: message.format_time(time_format),
            is_own: message.is_from(current_name),
        }
    }
}

/// Avatar initial for a display name: the first character, upper-cased.
///
/// Empty for an empty name. Upper-casing can yield more than one
/// character (`ß` becomes `SS`).
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
