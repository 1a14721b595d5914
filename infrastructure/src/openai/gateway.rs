//! OpenAI-compatible LLM Gateway implementation

use super::error::{OpenAiError, Result};
use super::protocol::{ApiErrorBody, ChatCompletionBody, ChatCompletionResponse};
use async_trait::async_trait;
use castle_application::{CompletionRequest, GatewayError, LlmGateway};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Connection settings for [`OpenAiGateway`]
#[derive(Clone)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Option<Duration>,
}

impl OpenAiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the API key from the named environment variable
    pub fn from_env(base_url: impl Into<String>, api_key_env: &str) -> Result<Self> {
        let api_key = std::env::var(api_key_env)
            .map_err(|_| OpenAiError::MissingApiKey(api_key_env.to_string()))?;
        Ok(Self::new(base_url, api_key))
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// LLM Gateway for any endpoint speaking the chat-completions API
pub struct OpenAiGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiGateway {
    /// Create a new gateway with its own HTTP client
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let endpoint = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        info!(endpoint = %endpoint, "OpenAiGateway initialized");

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_completion(&self, request: &CompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ChatCompletionBody::from(request))
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        debug!(status = status.as_u16(), bytes = raw.len(), "Completion response received");

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&raw)
                .map(|body| body.error.message)
                .unwrap_or(raw);
            warn!(status = status.as_u16(), "Completion request rejected: {}", message);
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&raw).map_err(|e| OpenAiError::ParseError {
                error: e.to_string(),
                raw: raw.clone(),
            })?;

        parsed.first_content().ok_or(OpenAiError::NoChoices)
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, request: CompletionRequest) -> std::result::Result<String, GatewayError> {
        self.post_completion(&request).await.map_err(GatewayError::from)
    }
}
