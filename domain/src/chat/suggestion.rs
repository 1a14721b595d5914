//! Starter questions offered on an empty conversation

/// A canned question shown by the empty-chat placeholder (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSuggestion {
    pub icon: String,
    pub text: String,
}

impl ChatSuggestion {
    pub fn new(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
        }
    }

    /// Built-in suggestions used when none are configured
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("castle", "Tell me the history of a famous castle"),
            Self::new("code", "Explain ownership in Rust with a short example"),
            Self::new("lightbulb", "Give me three ideas for a weekend project"),
        ]
    }
}
