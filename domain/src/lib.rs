//! Domain layer for castle-chat
//!
//! This crate contains the conversation entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Conversation**: ordered, append-only list of turns
//! - **ChatMessage**: one role-tagged, timestamped text entry

pub mod chat;
pub mod core;

// Re-export commonly used types
pub use chat::{
    conversation::Conversation,
    message::{ChatMessage, Role},
    suggestion::ChatSuggestion,
};
pub use crate::core::error::DomainError;
