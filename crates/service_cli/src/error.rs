//! CLI error types.

use pricer_models::models::ModelError;
use pricer_pricing::mc::{ConfigError as EngineConfigError, McError};
use pricer_pricing::scheme::SchemeError;
use thiserror::Error;

/// Errors raised by the `mcpricer` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration file: {0}")]
    InvalidFile(#[from] toml::de::Error),

    /// A configuration value (file, environment or flag) is invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Market parameters rejected by the model.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Scheme could not be built.
    #[error(transparent)]
    Scheme(#[from] SchemeError),

    /// Simulation settings rejected by the engine.
    #[error(transparent)]
    Simulation(#[from] EngineConfigError),

    /// A run failed.
    #[error(transparent)]
    Engine(#[from] McError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
