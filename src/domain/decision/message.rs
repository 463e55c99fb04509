//! Chat message entity for the clarifying conversation.
//!
//! Messages are immutable records of user/assistant turns. A session's
//! messages form an append-only sequence that is discarded on reset.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::MessageId;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The person making the decision.
    User,
    /// The decision coach (model replies and surfaced failures).
    Assistant,
}

/// An immutable chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    text: String,
    sender: Sender,
}

impl ChatMessage {
    /// Creates a message authored by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Creates a message authored by the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }

    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Returns true if the user wrote this message.
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_sender() {
        assert_eq!(ChatMessage::user("hi").sender(), Sender::User);
        assert_eq!(ChatMessage::assistant("hello").sender(), Sender::Assistant);
        assert!(ChatMessage::user("hi").is_from_user());
    }

    #[test]
    fn each_message_gets_a_fresh_id() {
        assert_ne!(ChatMessage::user("a").id(), ChatMessage::user("a").id());
    }

    #[test]
    fn sender_serializes_snake_case() {
        let json = serde_json::to_string(&Sender::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
