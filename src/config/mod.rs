//! Configuration module for the Niihau trie driver.
//!
//! Settings load from a file (TOML, YAML, or JSON) and can be overridden by
//! environment variables, then are validated before use — the same layered
//! loading approach the binary this crate is built around uses for its own
//! configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

pub mod capacity;
pub mod driver;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    fn validate(&self) -> ConfigResult<()>;
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Trie capacity and eviction configuration.
    pub capacity: capacity::CapacityConfig,

    /// Worker-thread simulation configuration.
    pub driver: driver::DriverConfig,

    /// Log configuration.
    pub log: LogConfig,
}

impl Validate for AppConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.capacity.validate()?;
        self.driver.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// Configuration loader: layers defaults, an optional config file, then
/// environment variables (prefixed by whatever `env_prefix` is given), in
/// that order.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> ConfigResult<AppConfig> {
        let mut builder = Config::builder();

        builder = builder.add_source(
            Config::try_from(&AppConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            builder = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => builder.add_source(File::with_name(path.to_str().unwrap())),
                Some("json") => builder.add_source(
                    File::with_name(path.to_str().unwrap()).format(config::FileFormat::Json),
                ),
                Some("yaml" | "yml") => builder.add_source(
                    File::with_name(path.to_str().unwrap()).format(config::FileFormat::Yaml),
                ),
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::PathParse(path) => {
                ConfigError::ParseError(format!("Invalid path: {path:?}"))
            }
            ExternalConfigError::FileParse { .. } => {
                ConfigError::ParseError("Error parsing config file".to_string())
            }
            ExternalConfigError::Foreign(err) => ConfigError::ParseError(err.to_string()),
            ExternalConfigError::Frozen => {
                ConfigError::ParseError("Configuration is frozen".to_string())
            }
            ExternalConfigError::Message(msg) => ConfigError::ParseError(msg),
            ExternalConfigError::Type { .. } => {
                ConfigError::ParseError("Type conversion error".to_string())
            }
        })?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        app_config.validate()?;
        Ok(app_config)
    }
}

/// Process-wide configuration handle, set once during startup.
static GLOBAL_CONFIG: OnceCell<Arc<AppConfig>> = OnceCell::new();

/// Initializes the global configuration. Returns an error if it has already
/// been set — unlike a raw `static mut`, double-init is a caught mistake
/// rather than a silent, unsynchronized overwrite.
pub fn init_global_config(config: AppConfig) -> ConfigResult<()> {
    GLOBAL_CONFIG
        .set(Arc::new(config))
        .map_err(|_| ConfigError::Other("global configuration already initialized".to_string()))
}

/// Initializes the global configuration with the default settings, if it has
/// not already been initialized.
pub fn init_default_config() -> ConfigResult<()> {
    if GLOBAL_CONFIG.get().is_some() {
        return Ok(());
    }
    init_global_config(AppConfig::default())
}

/// Returns the global configuration.
///
/// # Panics
///
/// Panics if the global configuration has not been initialized.
pub fn get_global_config() -> Arc<AppConfig> {
    GLOBAL_CONFIG
        .get()
        .cloned()
        .expect("global configuration not initialized")
}
