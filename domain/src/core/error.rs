//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Conversation has no pending user message to respond to")]
    NoPendingQuestion,
}
