//! Transcript message types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of a message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the assistant.
    Assistant,
}

/// A single message in the transcript.
///
/// Messages are immutable once created: the transcript is append-only and a
/// message's role and text never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier (UUID format)
    pub id: String,
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub text: String,
    /// Display timestamp (HH:MM local time)
    pub timestamp: String,
}

impl ChatMessage {
    /// Creates a message stamped with the current local time.
    pub fn now(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: chrono::Local::now().format("%H:%M").to_string(),
        }
    }
}
