//! Application layer for castle-chat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResponseConfig;
pub use ports::llm_gateway::{
    CompletionRequest, GatewayError, LlmGateway, PromptMessage, PromptRole,
};
pub use use_cases::respond::{RespondError, RespondUseCase};
