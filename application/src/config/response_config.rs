//! Response parameters: what the responder sends alongside the history.

use serde::{Deserialize, Serialize};

/// System prompt used when none is configured
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant. Format your responses \
using markdown, for example by using **bold** and _italic_ text, lists and code blocks.";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Parameters for generating an assistant turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseConfig {
    /// Model identifier passed to the API.
    pub model: String,
    /// Prompt placed before the conversation history.
    pub system_prompt: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl ResponseConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = ResponseConfig::default()
            .with_model("gpt-4o-mini")
            .with_system_prompt("Be brief.");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.system_prompt, "Be brief.");
    }
}
