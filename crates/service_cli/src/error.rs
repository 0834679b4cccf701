//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;
use compete_core::types::{AnalysisError, ValidationError};

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bad command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Scenario file could not be understood
    #[error("Invalid scenario file {path}: {reason}")]
    Scenario {
        /// Scenario file path
        path: String,
        /// What was wrong with it
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Analysis failed
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Input rejected before analysis
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
