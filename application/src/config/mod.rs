//! Application-level configuration.
//!
//! - [`ResponseConfig`]: model and system prompt for generated turns

pub mod response_config;

pub use response_config::{DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, ResponseConfig};
