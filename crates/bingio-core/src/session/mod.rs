//! Session-scoped types.
//!
//! A session is the lifetime of one open chat: an append-only transcript of
//! messages plus the two slots (mood, context) the dialogue fills in.

pub mod message;
pub mod model;

pub use message::{ChatMessage, MessageRole};
pub use model::SessionState;
