//! Configuration loading and config file resolution
//!
//! The bootstrap file is TOML:
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [mixer_profile]
//! xfader_transform = 1.0
//! xfader_curve = 1.0
//! xfader_reverse = false
//! ```
//!
//! A missing file is not an error: a warning is logged and built-in defaults
//! are used. Malformed TOML is an error.

use crate::params::MixerSettings;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MIXKIT_CONFIG";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Raw `[mixer_profile]` table, validated by [`TomlConfig::mixer_settings`]
    #[serde(default)]
    pub mixer_profile: toml::Table,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Load and parse a config file
    ///
    /// Fails if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it does not exist
    ///
    /// `None` (no config path could be resolved) also yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                warn!("Config file not found: {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                warn!("No config file location available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validated crossfader settings from the `[mixer_profile]` table
    pub fn mixer_settings(&self) -> MixerSettings {
        MixerSettings::from_toml_table(&self.mixer_profile)
    }
}

/// Config file resolution following priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. OS-dependent default (`<config dir>/mixkit/config.toml`)
///
/// Returns `None` only when no default config directory exists on this
/// platform.
pub fn resolve_config_path(cli_arg: Option<&str>, env_var_name: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: OS-dependent default
    default_config_path()
}

/// Get default configuration file path for the platform
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mixkit").join("config.toml"))
}

/// Resolve, load and validate in one step
///
/// Convenience for hosts that only need the crossfader settings.
pub fn load_mixer_settings(cli_arg: Option<&str>) -> Result<MixerSettings> {
    let path = resolve_config_path(cli_arg, CONFIG_ENV_VAR);
    let config = TomlConfig::load_or_default(path.as_deref())
        .map_err(|e| Error::Config(format!("Failed to load mixer settings: {}", e)))?;
    Ok(config.mixer_settings())
}
