//! Error types for the Monte Carlo engine.
//!
//! One enum per concern; [`McError`] wraps them at the orchestration level.

use pricer_models::models::ModelError;
use thiserror::Error;

use crate::scheme::SchemeError;

/// Configuration error for a Monte Carlo run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside [1, 100_000].
    #[error("Invalid step count {0}: must be in range [1, 100_000]")]
    InvalidStepCount(usize),

    /// Parallel mode needs at least one worker.
    #[error("Invalid worker count {0}: must be at least 1")]
    InvalidWorkerCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Running statistics precondition failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Dispersion needs at least two trials.
    #[error("Insufficient data: {count} trial(s), at least 2 required")]
    InsufficientData {
        /// Trials recorded so far
        count: u64,
    },

    /// The price was already finalised; call `reset` before recording again.
    #[error("Statistics already finalised")]
    AlreadyFinalised,
}

/// Path pricer failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PricerError {
    /// The pricer was handed a path without points.
    #[error("Empty path")]
    EmptyPath,

    /// Statistics update rejected.
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Orchestration error.
#[derive(Debug, Error)]
pub enum McError {
    /// Invalid run configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid model parameters.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Scheme construction failed.
    #[error("Scheme error: {0}")]
    Scheme(#[from] SchemeError),

    /// Statistics precondition failed.
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Pricer rejected a path or finalisation.
    #[error("Pricer error: {0}")]
    Pricer(#[from] PricerError),

    /// A required collaborator was not supplied to the builder.
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// Configured step count differs from the scheme's mesh.
    #[error("Step count mismatch: config has {config}, scheme mesh has {scheme}")]
    StepMismatch {
        /// Steps in the configuration
        config: usize,
        /// Steps in the scheme mesh
        scheme: usize,
    },
}
