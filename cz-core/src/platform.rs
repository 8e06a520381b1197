//! Per-user directory lookup.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{CzError, CzResult};

/// Application data directory; default log files live under it.
///
/// - Windows: `%APPDATA%/ContentZen`
/// - macOS: `~/Library/Application Support/ContentZen`
/// - Linux: `~/.local/share/ContentZen`
pub fn data_dir() -> CzResult<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| CzError::Config("could not determine data directory".into()))?;
    Ok(base.join(APP_NAME))
}

/// Configuration directory holding `config.toml`.
pub fn config_dir() -> CzResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| CzError::Config("could not determine config directory".into()))?;
    Ok(base.join(APP_NAME))
}
