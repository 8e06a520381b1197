//! ContentZen CLI - Command-line interface for the ContentZen CMS.
//!
//! A thin front end over `cz_api::ApiClient` for scripting and debugging:
//! every subcommand maps onto one client call.

mod commands;

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::debug;

use cz_core::config::AppConfig;
use cz_core::error::CzResult;
use cz_core::logging;

/// ContentZen - manage CMS content from the terminal.
#[derive(Parser)]
#[command(
    name = "contentzen",
    version,
    about = "ContentZen CMS command-line client",
    long_about = "A command-line interface for the ContentZen CMS.\n\
                  Manage documents, collections, media and webhooks of a ContentZen project."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// API token (overrides config and CONTENTZEN_API_TOKEN).
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log to the console only; do not write log files.
    #[arg(long, global = true)]
    no_log_file: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List and manage documents.
    Documents {
        #[command(subcommand)]
        action: commands::documents::DocumentsAction,
    },
    /// List and manage collections and their schemas.
    Collections {
        #[command(subcommand)]
        action: commands::collections::CollectionsAction,
    },
    /// Upload, download and manage media.
    Media {
        #[command(subcommand)]
        action: commands::media::MediaAction,
    },
    /// Manage webhooks.
    Webhooks {
        #[command(subcommand)]
        action: commands::webhooks::WebhooksAction,
    },
    /// Show or create the configuration file.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> CzResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = match cli.config.as_deref() {
        Some(path) => Path::new(path).to_path_buf(),
        None => AppConfig::default_config_path()?,
    };
    let mut config = if config_path.exists() {
        AppConfig::load_from_file(&config_path)?
    } else {
        AppConfig::default()
    };
    if let Some(token) = cli.token {
        config.client.api_token = token;
    }
    config.apply_env();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    let _guard = if cli.no_log_file {
        logging::init_console_logging(log_level);
        None
    } else {
        let log_dir = config.effective_log_dir()?;
        Some(logging::init_logging(log_level, &log_dir, config.logging.json_output)?)
    };

    debug!("ContentZen CLI v{}", cz_core::constants::APP_VERSION);

    // Dispatch to command handlers
    match cli.command {
        Commands::Documents { action } => {
            commands::documents::run(&config, action, cli.format).await
        }
        Commands::Collections { action } => {
            commands::collections::run(&config, action, cli.format).await
        }
        Commands::Media { action } => {
            commands::media::run(&config, action, cli.format).await
        }
        Commands::Webhooks { action } => {
            commands::webhooks::run(&config, action, cli.format).await
        }
        Commands::Config { action } => {
            commands::config::run(&config, &config_path, action, cli.format)
        }
    }
}
