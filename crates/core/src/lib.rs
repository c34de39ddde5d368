//! PrivateChat Core Library
//!
//! Session-local chat state: the message log, the composer, the
//! confirmation gate guarding history clears, and the controller that
//! owns all three. Nothing here knows about the UI toolkit.

pub mod composer;
pub mod config;
pub mod error;
pub mod gate;
pub mod invariants;
pub mod log;
pub mod models;
pub mod session;

pub use composer::Composer;
pub use config::ChatConfig;
pub use error::{Error, Result};
pub use gate::ConfirmationGate;
pub use log::MessageLog;
pub use models::*;
pub use session::ChatSession;
