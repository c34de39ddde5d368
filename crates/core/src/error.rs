//! Error types for PrivateChat Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Draft was empty or whitespace-only. Never shown to the user.
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
