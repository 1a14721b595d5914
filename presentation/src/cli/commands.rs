//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for castle-chat
#[derive(Parser, Debug)]
#[command(name = "castle-chat")]
#[command(author, version, about = "Chat with a hosted language model in your terminal")]
#[command(long_about = r#"
castle-chat opens a single chat page in the terminal. Type a question and
press Enter; the answer appears once the model responds.

Configuration files are loaded from (in priority order):
1. CASTLE_* environment variables   e.g. CASTLE_CHAT__MODEL=gpt-4o
2. --config <path>                  Explicit config file
3. ./castle.toml or ./.castle.toml  Project-level config
4. ~/.config/castle-chat/config.toml   Global config

The API key is read from the environment variable named by
client.api_key_env (OPENAI_API_KEY by default).

Example:
  castle-chat
  castle-chat -m gpt-4o --base-url http://localhost:11434/v1
"#)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Model to answer with (overrides chat.model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the chat-completions API (overrides client.base_url)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Log verbosity (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
