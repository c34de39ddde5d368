//! Composer: draft text and the display name used for new messages

use crate::log::MessageLog;
use crate::models::{avatar_initial, Message};

#[derive(Debug, Clone)]
pub struct Composer {
    draft: String,
    sender_name: String,
}

impl Composer {
    pub fn new(sender_name: impl Into<String>) -> Self {
        Self {
            draft: String::new(),
            sender_name: sender_name.into(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Replace the draft. Validation happens on submit.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Replace the display name for future messages. Any string is accepted.
    pub fn set_sender_name(&mut self, name: impl Into<String>) {
        self.sender_name = name.into();
    }

    pub fn avatar_initial(&self) -> String {
        avatar_initial(&self.sender_name)
    }

    /// Append the draft to `log` under the current display name.
    ///
    /// Clears the draft when the message is accepted. A blank draft is
    /// left as-is and nothing is appended.
    pub fn submit<'a>(&mut self, log: &'a mut MessageLog) -> Option<&'a Message> {
        match log.append(&self.draft, &self.sender_name) {
            Ok(message) => {
                self.draft.clear();
                Some(message)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Draft not submitted");
                None
            }
        }
    }
}
