//! Chat message entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a turn in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire name used by chat-completion APIs
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single role-tagged, timestamped turn (Entity)
///
/// Immutable once created: fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: Role,
    timestamp: DateTime<Utc>,
    text: String,
}

impl ChatMessage {
    pub fn new(role: Role, timestamp: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            role,
            timestamp,
            text: text.into(),
        }
    }

    /// A user turn stamped with the current UTC time
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, Utc::now(), text)
    }

    /// An assistant turn stamped with the current UTC time
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, Utc::now(), text)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
