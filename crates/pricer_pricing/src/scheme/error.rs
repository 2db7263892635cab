//! Error types for discretisation schemes.

use thiserror::Error;

/// Scheme construction errors.
///
/// # Examples
/// ```
/// use pricer_pricing::scheme::SchemeError;
///
/// let err = SchemeError::InvalidStepCount(0);
/// assert!(err.to_string().contains("step count"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemeError {
    /// Number of time steps must be at least one.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// The model horizon must be strictly positive.
    #[error("Non-positive maturity: T = {maturity}")]
    NonPositiveMaturity {
        /// The offending maturity
        maturity: f64,
    },

    /// Predictor-corrector weights must lie in [0, 1].
    #[error("Invalid blend weight {name} = {value}: must be in [0, 1]")]
    InvalidBlendWeight {
        /// Weight name (`alpha` or `beta`)
        name: &'static str,
        /// The offending value
        value: f64,
    },
}
