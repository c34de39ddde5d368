//! Data models for PrivateChat

mod message;
mod view;

pub use message::*;
pub use view::*;
