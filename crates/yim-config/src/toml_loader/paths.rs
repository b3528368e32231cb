//! Config path resolution and default file creation.

use std::path::{Path, PathBuf};

use tracing::info;
use yim_common::ConfigError;

use super::template::default_config_toml;

/// Directory name used under the OS config directory.
const APP_DIR: &str = "yim-launcher";

/// Get the platform-specific default config file path.
///
/// On Windows: `%APPDATA%\yim-launcher\config.toml`
/// On Linux: `~/.config/yim-launcher/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
