//! CLI configuration management
//!
//! Handles loading configuration from defaults, TOML files, environment
//! variables and command-line flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use compete_core::types::{Currency, RoleView};
use compete_engine::cache::DEFAULT_CACHE_CAPACITY;
use serde::Deserialize;
use thiserror::Error;

/// Largest accepted cache capacity.
pub const MAX_CACHE_CAPACITY: usize = 10_000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid role: {0}. Must be one of: retail, manufacturing")]
    InvalidRole(String),

    #[error("Invalid currency: {0}. Must be one of: USD, CNY, EUR")]
    InvalidCurrency(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidOutputFormat(String),

    #[error("Invalid cache capacity: {0}. Must be between 1 and {max}", max = MAX_CACHE_CAPACITY)]
    InvalidCacheCapacity(usize),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

fn parse_role(s: &str) -> Result<RoleView, ConfigError> {
    RoleView::from_str(s).map_err(|_| ConfigError::InvalidRole(s.to_string()))
}

fn parse_currency(s: &str) -> Result<Currency, ConfigError> {
    Currency::from_str(s).map_err(|_| ConfigError::InvalidCurrency(s.to_string()))
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Role used when a command does not name one
    #[serde(deserialize_with = "deserialize_from_str")]
    pub default_role: RoleView,
    /// Display currency
    #[serde(deserialize_with = "deserialize_from_str")]
    pub currency: Currency,
    /// Output format used when a command does not name one
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,
    /// Analysis cache capacity
    pub cache_capacity: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            default_role: RoleView::Retail,
            currency: Currency::USD,
            output_format: OutputFormat::Table,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Environment variable names
pub mod env {
    /// Log level
    pub const LOG_LEVEL: &str = "COMPETE_LOG_LEVEL";
    /// Default role
    pub const DEFAULT_ROLE: &str = "COMPETE_DEFAULT_ROLE";
    /// Display currency
    pub const CURRENCY: &str = "COMPETE_CURRENCY";
    /// Default output format
    pub const OUTPUT_FORMAT: &str = "COMPETE_OUTPUT_FORMAT";
    /// Cache capacity
    pub const CACHE_CAPACITY: &str = "COMPETE_CACHE_CAPACITY";
    /// Config file path
    pub const CONFIG: &str = "COMPETE_CONFIG";
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply values found through `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(env::LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(role) = lookup(env::DEFAULT_ROLE) {
            self.default_role = parse_role(&role)?;
        }
        if let Some(currency) = lookup(env::CURRENCY) {
            self.currency = parse_currency(&currency)?;
        }
        if let Some(format) = lookup(env::OUTPUT_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }
        if let Some(capacity) = lookup(env::CACHE_CAPACITY) {
            self.cache_capacity = capacity.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!(
                    "{} must be a positive integer, got {}",
                    env::CACHE_CAPACITY,
                    capacity
                ))
            })?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 || self.cache_capacity > MAX_CACHE_CAPACITY {
            return Err(ConfigError::InvalidCacheCapacity(self.cache_capacity));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(currency) = &cli.currency {
            self.currency = parse_currency(currency)?;
        }
        Ok(())
    }

    /// Role for a command, falling back to the configured default.
    pub fn role_or_default(&self, role: Option<&str>) -> Result<RoleView, ConfigError> {
        role.map(parse_role).unwrap_or(Ok(self.default_role))
    }

    /// Output format for a command, falling back to the configured default.
    pub fn format_or_default(&self, format: Option<&str>) -> Result<OutputFormat, ConfigError> {
        format.map(OutputFormat::from_str).unwrap_or(Ok(self.output_format))
    }
}

/// Global CLI arguments that feed the configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Currency override
    pub currency: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
