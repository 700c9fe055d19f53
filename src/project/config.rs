//! Effective run settings
//!
//! Settings are layered, highest precedence first: command-line flags,
//! environment variables (both handled by clap), the user config file, then
//! built-in defaults.

use crate::error::{Error, Result};
use crate::packages::registry::{DEFAULT_REGISTRY, DEFAULT_TIMEOUT};
use crate::project::user_config::UserConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Package manager that performs the install step
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Command that installs everything listed in package.json
    pub fn install_command(&self) -> String {
        format!("{} install", self.as_str())
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub registry: String,
    /// Shell command for the install step
    pub install_command: String,
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registry: DEFAULT_REGISTRY.to_string(),
            install_command: PackageManager::default().install_command(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Settings {
    /// Merge explicit overrides (flags or env) over the user config.
    ///
    /// A package manager given on the command line wins over an
    /// `install_command` from the user config.
    pub fn resolve(
        registry: Option<String>,
        package_manager: Option<PackageManager>,
        user: Option<UserConfig>,
    ) -> Result<Self> {
        let user = user.unwrap_or_default();

        let registry = registry
            .or(user.registry)
            .unwrap_or_else(|| DEFAULT_REGISTRY.to_string());
        validate_registry(&registry)?;

        let install_command = match (package_manager, user.install_command) {
            (Some(pm), _) => pm.install_command(),
            (None, Some(command)) => command,
            (None, None) => user.package_manager.unwrap_or_default().install_command(),
        };

        let request_timeout = user
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Self {
            registry,
            install_command,
            request_timeout,
        })
    }
}

fn validate_registry(registry: &str) -> Result<()> {
    if !registry.starts_with("http://") && !registry.starts_with("https://") {
        return Err(Error::Config(format!(
            "Invalid registry URL: {}. Must start with http:// or https://",
            registry
        )));
    }
    Ok(())
}
