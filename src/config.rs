use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::requirement::Requirement;
use crate::version::GoVersion;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "goreqver.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".goreqver.toml";

/// Represents the complete configuration for go-reqver.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub requirement: RequirementConfig,

    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

/// Version bounds as written in the config file, e.g. `minimum = "go1.18"`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct RequirementConfig {
    #[serde(default)]
    pub minimum: Option<String>,

    #[serde(default)]
    pub maximum: Option<String>,
}

/// Settings for querying the host toolchain.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ToolchainConfig {
    #[serde(default)]
    pub go_binary: Option<String>,
}

impl RequirementConfig {
    /// Parses both bounds and validates the resulting requirement
    pub fn to_requirement(&self) -> Result<Requirement> {
        let requirement = Requirement {
            minimum: self.minimum.as_deref().map(GoVersion::parse).transpose()?,
            maximum: self.maximum.as_deref().map(GoVersion::parse).transpose()?,
        };
        requirement.validate()?;
        Ok(requirement)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `goreqver.toml` in current directory
/// 3. `.goreqver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            tracing::debug!("no config file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}
