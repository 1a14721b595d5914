//! CLI entrypoint for castle-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::Colorize;
use castle_application::{LlmGateway, RespondUseCase};
use castle_infrastructure::{
    ConfigLoader, ConfigSource, FileConfig, OpenAiConfig, OpenAiGateway, SourceStatus,
};
use castle_presentation::{ChatPage, Cli, PageConfig, TuiApp};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "castle-chat.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(model) = &cli.model {
        config.chat.model = model.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.client.base_url = base_url.clone();
    }

    if cli.show_config {
        return show_config(&cli, &config);
    }

    config.validate().context("Invalid configuration")?;

    // Initialize logging based on verbosity level.
    // The terminal belongs to the TUI, so logs go to a file.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let log_dir = log_dir(&config);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let (writer, _log_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&log_dir, LOG_FILE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    info!(model = %config.chat.model, base_url = %config.client.base_url, "Starting castle-chat");

    // === Dependency Injection ===
    // Create infrastructure adapter (OpenAI-compatible gateway)
    let client_config = OpenAiConfig::from_env(
        config.client.base_url.clone(),
        &config.client.api_key_env,
    )?
    .with_timeout(config.client.timeout_seconds.map(Duration::from_secs));
    let gateway: Arc<dyn LlmGateway> = Arc::new(OpenAiGateway::new(client_config)?);

    let responder = RespondUseCase::new(config.response_config());
    let page = ChatPage::new(gateway, responder)
        .with_config(PageConfig {
            column_width: config.layout.column_width,
            cells_per_unit: config.layout.cells_per_unit,
            input_height: config.layout.input_height,
        })
        .with_suggestions(config.suggestions());

    let mut app = TuiApp::new(page);
    app.run().await?;

    Ok(())
}

/// Log directory from config, with `~/` expanded
fn log_dir(config: &FileConfig) -> PathBuf {
    match config.log.directory.as_deref() {
        Some(dir) => match (dir.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(dir),
        },
        None => ConfigLoader::default_log_dir(),
    }
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    println!("{}", "Configuration sources (highest priority first):".bold());

    if cli.no_config {
        println!("  {} files ignored (--no-config)", "-".dimmed());
    } else {
        for SourceStatus { source, found } in ConfigLoader::sources(cli.config.as_ref()) {
            let marker = if found { "✓".green() } else { "✗".dimmed() };
            let label = match &source {
                ConfigSource::Environment => "CASTLE_* environment variables".to_string(),
                ConfigSource::Explicit(path) => format!("{} (--config)", path.display()),
                ConfigSource::Project(path) => format!("{} (project)", path.display()),
                ConfigSource::Global(path) => format!("{} (global)", path.display()),
                ConfigSource::Defaults => "built-in defaults".to_string(),
            };
            println!("  {} {}", marker, label);
        }
    }

    println!();
    println!("{}", "Effective configuration:".bold());
    let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
    println!("{}", rendered);

    if let Err(e) = config.validate() {
        println!("{} {}", "warning:".yellow().bold(), e);
    }

    Ok(())
}
