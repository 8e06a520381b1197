//! CLI command implementations.

pub mod collections;
pub mod config;
pub mod documents;
pub mod media;
pub mod webhooks;

use std::path::Path;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use dialoguer::Confirm;
use serde::de::DeserializeOwned;
use serde::Serialize;

use cz_api::ApiClient;
use cz_core::config::AppConfig;
use cz_core::error::{CzError, CzResult};

/// Helper to create an API client from config.
pub fn create_api_client(config: &AppConfig) -> CzResult<ApiClient> {
    ApiClient::from_config(&config.client)
}

/// Pretty-print any serializable value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CzResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A table with the CLI's standard look.
pub fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<comfy_table::Cell>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Parse a JSON argument that is either inline JSON or a path to a JSON file.
pub fn load_json<T: DeserializeOwned>(input: &str) -> CzResult<T> {
    let path = Path::new(input);
    let text = if path.is_file() {
        std::fs::read_to_string(path)?
    } else {
        input.to_string()
    };
    serde_json::from_str(&text)
        .map_err(|e| CzError::Serialization(format!("invalid JSON input: {e}")))
}

/// Ask before a destructive operation unless `--yes` was given.
pub fn confirm(prompt: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}

/// Truncate a string to a maximum length, appending an ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
