//! Presentation layer for castle-chat
//!
//! This crate contains the chat page, its terminal host and the
//! CLI definitions.

pub mod cli;
pub mod config;
pub mod page;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::PageConfig;
pub use page::{ChatPage, NoRefresh, Refresh, View};
pub use tui::TuiApp;
