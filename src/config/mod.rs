//! Configuration module
//!
//! Handles loading and saving of glock.toml configuration files.

mod types;

pub use types::Config;

use crate::error::{GlockError, Result};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "glock.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        GlockError::Config(format!(
            "Cannot read config from '{}': {}. Run 'glock config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| GlockError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
