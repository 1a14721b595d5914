//! Configuration file loading for castle-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CASTLE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./castle.toml` or `./.castle.toml`
//! 4. Global: `$XDG_CONFIG_HOME/castle-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChatConfig, FileClientConfig, FileConfig, FileLayoutConfig,
    FileLogConfig, FileSuggestion,
};
pub use loader::{ConfigLoader, ConfigSource, SourceStatus};
