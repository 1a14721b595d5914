//! Respond use case.
//!
//! Generates the assistant's answer to the newest user turn and appends it
//! to the conversation. The gateway is handed in per call rather than held,
//! so the caller decides which client a response goes through.

use crate::config::ResponseConfig;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway, PromptMessage};
use castle_domain::{ChatMessage, Conversation, DomainError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while generating a response.
#[derive(Error, Debug)]
pub enum RespondError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No response from model")]
    EmptyResponse,
}

/// Use case for answering the pending user turn.
///
/// 1. Check the conversation ends with a user turn
/// 2. Send system prompt + full history to the gateway
/// 3. Append the answer as an assistant turn
#[derive(Debug, Clone, Default)]
pub struct RespondUseCase {
    config: ResponseConfig,
}

impl RespondUseCase {
    pub fn new(config: ResponseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResponseConfig {
        &self.config
    }

    /// Build the completion request for the current history
    pub fn build_request(&self, conversation: &Conversation) -> CompletionRequest {
        let mut messages = Vec::with_capacity(conversation.len() + 1);
        messages.push(PromptMessage::system(&self.config.system_prompt));
        messages.extend(conversation.messages().iter().map(PromptMessage::from));

        CompletionRequest {
            model: self.config.model.clone(),
            messages,
        }
    }

    /// Generate and append the assistant turn, returning a copy of it
    pub async fn execute(
        &self,
        conversation: &mut Conversation,
        gateway: &dyn LlmGateway,
    ) -> Result<ChatMessage, RespondError> {
        if !conversation.awaits_response() {
            return Err(DomainError::NoPendingQuestion.into());
        }

        let request = self.build_request(conversation);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Requesting completion"
        );

        let answer = gateway.complete(request).await?;
        if answer.trim().is_empty() {
            return Err(RespondError::EmptyResponse);
        }

        let message = ChatMessage::assistant(answer);
        conversation.push(message.clone());
        info!(turns = conversation.len(), "Assistant response appended");

        Ok(message)
    }
}
