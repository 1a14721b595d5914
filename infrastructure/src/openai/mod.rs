//! OpenAI-compatible chat-completions adapter
//!
//! - [`gateway::OpenAiGateway`]: [`LlmGateway`](castle_application::LlmGateway) over HTTP
//! - [`protocol`]: request/response wire types
//! - [`error::OpenAiError`]: adapter errors, mapped onto `GatewayError`

pub mod error;
pub mod gateway;
pub mod protocol;
