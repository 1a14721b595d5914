//! Chat domain.
//!
//! - [`message::ChatMessage`]: a single role-tagged, timestamped turn
//! - [`conversation::Conversation`]: the append-only turn list
//! - [`suggestion::ChatSuggestion`]: starter questions for an empty chat

pub mod conversation;
pub mod message;
pub mod suggestion;
