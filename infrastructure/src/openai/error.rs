//! Error types for the OpenAI-compatible adapter

use castle_application::GatewayError;
use thiserror::Error;

/// Result type alias for OpenAI adapter operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to a chat-completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response contained no choices")]
    NoChoices,

    #[error("API key not found in environment variable {0}")]
    MissingApiKey(String),
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            OpenAiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            OpenAiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            OpenAiError::Api { status, message } => GatewayError::Api { status, message },
            OpenAiError::MissingApiKey(var) => GatewayError::ConnectionError(format!(
                "API key not found in environment variable {}",
                var
            )),
            other @ (OpenAiError::ParseError { .. } | OpenAiError::NoChoices) => {
                GatewayError::InvalidResponse(other.to_string())
            }
        }
    }
}
