//! Conversation aggregate: append-only list of turns

use super::message::ChatMessage;
use serde::{Deserialize, Serialize};

/// Ordered sequence of chat turns
///
/// The only mutation is [`Conversation::push`]; turns are never removed or
/// reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// True when the newest turn is a user turn still waiting for an answer
    pub fn awaits_response(&self) -> bool {
        self.last().is_some_and(ChatMessage::is_user)
    }
}
