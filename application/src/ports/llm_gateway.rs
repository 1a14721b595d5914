//! LLM Gateway port
//!
//! Defines the interface for communicating with a hosted chat-completion API.

use async_trait::async_trait;
use castle_domain::{ChatMessage, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Role of a prompt message sent to the API
///
/// Wider than [`Role`]: the system prompt never appears in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    System,
    User,
    Assistant,
}

impl From<Role> for PromptRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => PromptRole::User,
            Role::Assistant => PromptRole::Assistant,
        }
    }
}

/// One `{role, content}` entry of a completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::System,
            content: content.into(),
        }
    }
}

impl From<&ChatMessage> for PromptMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role().into(),
            content: message.text().to_string(),
        }
    }
}

/// A non-streaming chat-completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the hosted model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the request and return the assistant's answer text
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_message_from_chat_message() {
        let msg = ChatMessage::assistant("hello");
        let prompt = PromptMessage::from(&msg);
        assert_eq!(prompt.role, PromptRole::Assistant);
        assert_eq!(prompt.content, "hello");
    }

    #[test]
    fn test_api_error_display() {
        let err = GatewayError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (status 401): Incorrect API key provided"
        );
    }
}
