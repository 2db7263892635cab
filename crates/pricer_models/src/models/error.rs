//! Error types for model construction.

use thiserror::Error;

/// Errors raised while building option parameters or stochastic models.
///
/// All variants are construction errors: a model that fails to build must not
/// be used to create a scheme.
///
/// # Examples
/// ```
/// use pricer_models::models::ModelError;
///
/// let err = ModelError::NonPositiveMaturity { maturity: 0.0 };
/// assert!(err.to_string().contains("maturity"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Time to maturity is zero or negative, so no time mesh can be built.
    #[error("Time to maturity must be positive: T = {maturity}")]
    NonPositiveMaturity {
        /// The rejected maturity
        maturity: f64,
    },

    /// A parameter is outside its admissible range.
    #[error("Invalid parameter '{name}': {value} ({reason})")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Option type flag other than `1` (call) or `-1` (put).
    #[error("Invalid option type flag {0}: expected 1 (call) or -1 (put)")]
    InvalidOptionFlag(i32),
}
