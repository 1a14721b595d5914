//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into layer-specific
//! configuration by the binary.

use castle_application::ResponseConfig;
use castle_application::config::{DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT};
use castle_domain::ChatSuggestion;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("column_width must be positive, got {0}")]
    InvalidColumnWidth(f32),

    #[error("cells_per_unit cannot be 0")]
    InvalidCellsPerUnit,

    #[error("suggestion text cannot be empty")]
    EmptySuggestion,
}

/// Raw API client configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Timeout in seconds for API calls
    pub timeout_seconds: Option<u64>,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_seconds: Some(60),
        }
    }
}

/// Raw suggestion entry from TOML (`[[chat.suggestions]]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSuggestion {
    #[serde(default = "default_suggestion_icon")]
    pub icon: String,
    pub text: String,
}

fn default_suggestion_icon() -> String {
    "chat".to_string()
}

/// Raw chat configuration from TOML
///
/// # Example
///
/// ```toml
/// [chat]
/// model = "gpt-4o-mini"
/// system_prompt = "You are a terse assistant."
///
/// [[chat.suggestions]]
/// icon = "castle"
/// text = "Who built the first castle?"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Model identifier passed to the API
    pub model: String,
    /// Prompt placed before the conversation history
    pub system_prompt: String,
    /// Starter questions for an empty chat (built-in set when empty)
    pub suggestions: Vec<FileSuggestion>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            suggestions: Vec::new(),
        }
    }
}

/// Raw layout configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLayoutConfig {
    /// Width of the centered column, also the full-width threshold (units)
    pub column_width: f32,
    /// Terminal cells per layout unit
    pub cells_per_unit: u16,
    /// Height of the input field in lines
    pub input_height: u16,
}

impl Default for FileLayoutConfig {
    fn default() -> Self {
        Self {
            column_width: 40.0,
            cells_per_unit: 2,
            input_height: 8,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Directory for the log file (platform data dir when unset)
    pub directory: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// API client settings
    pub client: FileClientConfig,
    /// Chat behavior settings
    pub chat: FileChatConfig,
    /// Layout settings
    pub layout: FileLayoutConfig,
    /// Logging settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.client.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.client.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if self.chat.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if !(self.layout.column_width > 0.0) {
            return Err(ConfigValidationError::InvalidColumnWidth(
                self.layout.column_width,
            ));
        }

        if self.layout.cells_per_unit == 0 {
            return Err(ConfigValidationError::InvalidCellsPerUnit);
        }

        if self.chat.suggestions.iter().any(|s| s.text.trim().is_empty()) {
            return Err(ConfigValidationError::EmptySuggestion);
        }

        Ok(())
    }

    /// Model and system prompt for the respond use case
    pub fn response_config(&self) -> ResponseConfig {
        ResponseConfig::default()
            .with_model(self.chat.model.clone())
            .with_system_prompt(self.chat.system_prompt.clone())
    }

    /// Configured suggestions, or the built-in set when none are given
    pub fn suggestions(&self) -> Vec<ChatSuggestion> {
        if self.chat.suggestions.is_empty() {
            return ChatSuggestion::defaults();
        }
        self.chat
            .suggestions
            .iter()
            .map(|s| ChatSuggestion::new(s.icon.clone(), s.text.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[client]
base_url = "http://localhost:11434/v1"
api_key_env = "LOCAL_KEY"
timeout_seconds = 120

[chat]
model = "llama3"
system_prompt = "Be brief."

[[chat.suggestions]]
icon = "castle"
text = "Who built the first castle?"

[[chat.suggestions]]
text = "What is a moat for?"

[layout]
column_width = 50.0
cells_per_unit = 3
input_height = 5

[log]
directory = "/tmp/castle"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.client.base_url, "http://localhost:11434/v1");
        assert_eq!(config.client.api_key_env, "LOCAL_KEY");
        assert_eq!(config.client.timeout_seconds, Some(120));
        assert_eq!(config.chat.model, "llama3");
        assert_eq!(config.chat.suggestions.len(), 2);
        assert_eq!(config.chat.suggestions[1].icon, "chat");
        assert_eq!(config.layout.column_width, 50.0);
        assert_eq!(config.layout.cells_per_unit, 3);
        assert_eq!(config.layout.input_height, 5);
        assert_eq!(config.log.directory.as_deref(), Some("/tmp/castle"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config_keeps_defaults() {
        let toml_str = r#"
[chat]
model = "gpt-4o-mini"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.model, "gpt-4o-mini");
        assert_eq!(config.chat.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.client.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.layout.column_width, 40.0);
        assert_eq!(config.layout.cells_per_unit, 2);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.client.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = FileConfig::default();
        config.chat.model = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_rejects_bad_layout() {
        let mut config = FileConfig::default();
        config.layout.column_width = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidColumnWidth(0.0))
        );

        let mut config = FileConfig::default();
        config.layout.cells_per_unit = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidCellsPerUnit)
        );
    }

    #[test]
    fn test_suggestions_fall_back_to_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.suggestions(), ChatSuggestion::defaults());
    }

    #[test]
    fn test_response_config_uses_chat_section() {
        let mut config = FileConfig::default();
        config.chat.model = "llama3".to_string();
        let response = config.response_config();
        assert_eq!(response.model, "llama3");
        assert_eq!(response.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }
}
