//! Configuration module for Lexicode.
//!
//! This module loads settings from files (TOML or JSON) and overrides them
//! with environment variables. All configuration values are validated for
//! correctness before use.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::data_structures::huffman_codec::HuffmanConfig;
use crate::data_structures::prefix_tree::PrefixTreeConfig;
use crate::error::config::ConfigError;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LEXICODE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Lexicode.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LexicodeConfig {
    /// Log configuration
    pub log: LogConfig,

    /// Prefix tree configuration
    pub trie: PrefixTreeConfig,

    /// Huffman codec configuration
    pub codec: HuffmanConfig,
}

impl Validate for LexicodeConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.log.validate()?;
        self.trie.validate()?;
        self.codec.validate()?;
        Ok(())
    }
}

impl Validate for PrefixTreeConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Validate for HuffmanConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Both decode policies are valid
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Lexicode.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(LexicodeConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<LexicodeConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&LexicodeConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let lexicode_config: LexicodeConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        lexicode_config.validate()?;

        Ok(lexicode_config)
    }

    /// Loads the configuration, falling back to defaults and environment
    /// variables when the configuration file does not exist.
    pub fn load_or_default(&self) -> ConfigResult<LexicodeConfig> {
        match self.load() {
            Err(ConfigError::FileNotFound(path)) => {
                tracing::warn!("Configuration file not found at: {}", path.display());
                ConfigLoader::new(None::<&Path>, &self.env_prefix).load()
            }
            other => other,
        }
    }
}
