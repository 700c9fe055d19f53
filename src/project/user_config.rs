//! User-level configuration (~/.config/depwiz/config.toml)
//!
//! Machine-specific defaults such as a private registry mirror or a preferred
//! package manager. `DEPWIZ_CONFIG` points at an alternative file.

use crate::error::{Error, Result};
use crate::project::config::PackageManager;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "DEPWIZ_CONFIG";

/// User configuration loaded from ~/.config/depwiz/config.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    /// Registry base URL (e.g. a corporate mirror)
    pub registry: Option<String>,
    /// Package manager used for the install step
    pub package_manager: Option<PackageManager>,
    /// Full install command, overriding the package manager's default
    pub install_command: Option<String>,
    /// Timeout for a single registry lookup
    pub request_timeout_secs: Option<u64>,
}

/// Get the user config directory path.
///
/// Returns `~/.config/depwiz/` on Unix and `%APPDATA%\depwiz\` on Windows.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("depwiz"))
}

/// Get the user config file path, honoring `DEPWIZ_CONFIG`.
pub fn get_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    get_config_dir().map(|p| p.join("config.toml"))
}

/// Load user configuration from the default location.
///
/// Returns `None` if the config file doesn't exist.
/// Returns an error if the file exists but is invalid.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    match get_config_path() {
        Some(path) => load_user_config_from(&path),
        None => Ok(None),
    }
}

/// Load user configuration from an explicit path.
pub fn load_user_config_from(config_path: &Path) -> Result<Option<UserConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::Config(format!(
            "Failed to read user config at {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let config: UserConfig = toml::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse user config at {}: {}",
            config_path.display(),
            e.message()
        ))
    })?;

    if config.request_timeout_secs == Some(0) {
        return Err(Error::Config(format!(
            "request_timeout_secs in {} must be greater than 0",
            config_path.display()
        )));
    }

    if let Some(ref command) = config.install_command {
        if command.trim().is_empty() {
            return Err(Error::Config(format!(
                "install_command in {} is empty",
                config_path.display()
            )));
        }
    }

    tracing::debug!(path = %config_path.display(), "loaded user config");
    Ok(Some(config))
}
