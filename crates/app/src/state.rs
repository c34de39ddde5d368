//! Application state management

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use directories::ProjectDirs;
use privatechat_core::{ChatConfig, ChatSession};

/// Main application state
pub struct AppState {
    session: Mutex<ChatSession>,
    config: ChatConfig,
}

impl AppState {
    /// Build state from the config file in the platform config directory
    pub fn load() -> Self {
        let config = match Self::config_path() {
            Some(path) => Self::load_config(&path),
            None => {
                tracing::warn!("Could not determine config directory, using defaults");
                ChatConfig::default()
            }
        };

        Self::with_config(config)
    }

    pub fn with_config(config: ChatConfig) -> Self {
        Self {
            session: Mutex::new(ChatSession::new(&config)),
            config,
        }
    }

    /// `config.toml` in the platform config directory
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "privatechat", "privatechat")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load config, falling back to defaults when the file is unusable
    pub fn load_config(path: &Path) -> ChatConfig {
        match ChatConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring config file");
                ChatConfig::default()
            }
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Lock the chat session.
    ///
    /// Every access happens on the UI thread, so a poisoned lock only
    /// means an earlier callback panicked; the session itself is still
    /// consistent between operations.
    pub fn session(&self) -> MutexGuard<'_, ChatSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
