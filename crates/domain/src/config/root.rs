use serde::{Deserialize, Serialize};
use std::path::Path;

use super::api::ApiConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordsConfig;

const LOCAL_CONFIG: &str = "zonectl.toml";
const SYSTEM_CONFIG: &str = "/etc/zonectl/config.toml";

/// Main configuration structure for zonectl
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Record-management API endpoint
    #[serde(default)]
    pub api: ApiConfig,

    /// Defaults applied to records built from text
    #[serde(default)]
    pub records: RecordsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonectl.toml in current directory
    /// 3. /etc/zonectl/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(url) = overrides.base_url {
            self.api.base_url = url;
        }
        if let Some(ttl) = overrides.default_ttl {
            self.records.default_ttl = ttl;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "API base URL cannot be empty".to_string(),
            ));
        }

        if self.records.default_ttl == 0 {
            return Err(ConfigError::Validation(
                "Default TTL cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string).map_err(|source| ConfigError::FileWrite {
            path: path.to_string(),
            source,
        })
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG, SYSTEM_CONFIG]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub base_url: Option<String>,
    pub default_ttl: Option<u32>,
}
