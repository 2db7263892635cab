//! Geometric Brownian Motion (GBM) with continuous dividend yield.
//!
//! ```text
//! dS = (r − q) S dt + σ S dW
//! ```
//!
//! Coefficients for the discretisation schemes:
//! - a(t, S) = (r − q) S
//! - b(t, S) = σ S
//! - ∂b/∂S = σ

use super::error::ModelError;
use super::params::ModelParameters;
use super::stochastic::StochasticModel;

/// GBM model reading r, q and σ from its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmSde {
    params: ModelParameters,
}

impl GbmSde {
    /// Creates a GBM model.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` when the parameters fail validation, in particular
    /// for non-positive maturity.
    pub fn new(params: ModelParameters) -> Result<Self, ModelError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Risk-neutral growth rate r − q.
    #[inline]
    pub fn growth_rate(&self) -> f64 {
        self.params.rate - self.params.dividend
    }
}

impl StochasticModel for GbmSde {
    #[inline]
    fn params(&self) -> &ModelParameters {
        &self.params
    }

    #[inline]
    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.growth_rate() * x
    }

    #[inline]
    fn diffusion(&self, _t: f64, x: f64) -> f64 {
        self.params.volatility * x
    }

    #[inline]
    fn diffusion_derivative(&self, _t: f64, _x: f64) -> f64 {
        self.params.volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gbm_coefficients() {
        let params = ModelParameters {
            dividend: 0.02,
            ..ModelParameters::default()
        };
        let gbm = GbmSde::new(params).unwrap();

        assert_relative_eq!(gbm.growth_rate(), 0.03, epsilon = 1e-15);
        assert_relative_eq!(gbm.drift(0.0, 100.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(gbm.diffusion(0.0, 100.0), 20.0, epsilon = 1e-12);
        assert_relative_eq!(gbm.diffusion_derivative(0.0, 100.0), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_gbm_corrected_drift_is_log_drift() {
        let gbm = GbmSde::new(ModelParameters::default()).unwrap();
        let s = 80.0;
        assert_relative_eq!(
            gbm.drift_corrected(0.3, s, 0.5),
            s * (0.05 - 0.5 * 0.04),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_gbm_zero_volatility() {
        let params = ModelParameters {
            volatility: 0.0,
            ..ModelParameters::default()
        };
        let gbm = GbmSde::new(params).unwrap();
        assert_eq!(gbm.diffusion(0.0, 100.0), 0.0);
        assert_eq!(gbm.drift_corrected(0.0, 100.0, 0.5), gbm.drift(0.0, 100.0));
    }

    #[test]
    fn test_gbm_rejects_expired_option() {
        let params = ModelParameters {
            maturity: -0.5,
            ..ModelParameters::default()
        };
        assert!(GbmSde::new(params).is_err());
    }
}
