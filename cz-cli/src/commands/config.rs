//! Configuration commands.

use std::path::Path;

use clap::Subcommand;
use console::style;

use cz_core::config::AppConfig;
use cz_core::error::CzResult;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration (token redacted).
    Show,
    /// Write a configuration file with the current settings.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

pub fn run(
    config: &AppConfig,
    path: &Path,
    action: ConfigAction,
    format: OutputFormat,
) -> CzResult<()> {
    match action {
        ConfigAction::Show => {
            let token_state = if config.client.has_credential() { "set" } else { "not set" };
            match format {
                OutputFormat::Json => super::print_json(&serde_json::json!({
                    "config_path": path.display().to_string(),
                    "base_url": config.client.base_url,
                    "api_token": token_state,
                    "timeout_ms": config.client.timeout_ms,
                    "log_level": config.logging.level,
                }))?,
                OutputFormat::Text => {
                    println!("{}", style("Configuration").bold().underlined());
                    println!("  File:       {}", path.display());
                    println!("  Base URL:   {}", config.client.base_url);
                    println!("  API token:  {token_state}");
                    println!("  Timeout:    {} ms", config.client.timeout_ms);
                    println!("  Log level:  {}", config.logging.level);
                }
            }
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                println!(
                    "  {} {} already exists (use --force to overwrite)",
                    style("SKIP").yellow().bold(),
                    path.display()
                );
                return Ok(());
            }
            config.save_to_file(path)?;
            println!("  {} Wrote {}", style("OK").green().bold(), path.display());
        }
    }
    Ok(())
}
