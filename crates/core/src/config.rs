//! Chat configuration
//!
//! Optional TOML file with UI settings. Every field has a default, so an
//! empty file (or no file at all) is valid.

use std::fmt::Write;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Display name used until the user types one
pub const DEFAULT_DISPLAY_NAME: &str = "Usuario";

/// Time-of-day format for message rows
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Initial display name
    pub display_name: String,
    /// strftime format for message timestamps
    pub time_format: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl ChatConfig {
    /// Parse and validate config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ChatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Reject time formats chrono cannot render
    pub fn validate(&self) -> Result<()> {
        if self.time_format.trim().is_empty() {
            return Err(Error::Config("time_format is empty".to_string()));
        }

        let invalid = StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error));
        if invalid {
            return Err(Error::Config(format!(
                "time_format '{}' is not a valid strftime format",
                self.time_format
            )));
        }

        // Some specifiers parse but are parse-only (e.g. `%#z`) and fail
        // when rendered
        let mut rendered = String::new();
        let items = StrftimeItems::new(&self.time_format);
        if write!(rendered, "{}", Local::now().format_with_items(items)).is_err() {
            return Err(Error::Config(format!(
                "time_format '{}' cannot be used for display",
                self.time_format
            )));
        }

        Ok(())
    }
}
