//! Infrastructure layer for castle-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigSource, ConfigValidationError, FileConfig, FileLayoutConfig, SourceStatus,
};
pub use openai::{
    error::{OpenAiError, Result},
    gateway::{OpenAiConfig, OpenAiGateway},
};
