//! Stochastic model with injected coefficient closures.

use std::fmt;

use super::error::ModelError;
use super::params::ModelParameters;
use super::stochastic::StochasticModel;

/// One-factor SDE whose drift, diffusion and diffusion derivative are closures.
///
/// Swapping a coefficient formula never requires touching the engine: any
/// `Fn(t, x) -> f64` that is `Send + Sync` can be injected. The closures are
/// type parameters, so calls are statically dispatched.
///
/// # Type Parameters
///
/// * `D` - drift a(t, x)
/// * `S` - diffusion b(t, x)
/// * `DS` - diffusion derivative ∂b/∂x(t, x)
///
/// # Example
/// ```
/// use pricer_models::models::{GeneralSde, ModelParameters, StochasticModel};
///
/// let params = ModelParameters::default();
/// let (r, sig) = (params.rate, params.volatility);
///
/// let sde = GeneralSde::new(
///     params,
///     move |_t, s| r * s,
///     move |_t, s| sig * s,
///     move |_t, _s| sig,
/// )
/// .unwrap();
///
/// assert!((sde.diffusion(0.5, 100.0) - 20.0).abs() < 1e-12);
/// assert!((sde.diffusion_derivative(0.5, 100.0) - 0.2).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct GeneralSde<D, S, DS> {
    params: ModelParameters,
    drift: D,
    diffusion: S,
    diffusion_derivative: DS,
}

impl<D, S, DS> GeneralSde<D, S, DS>
where
    D: Fn(f64, f64) -> f64 + Send + Sync,
    S: Fn(f64, f64) -> f64 + Send + Sync,
    DS: Fn(f64, f64) -> f64 + Send + Sync,
{
    /// Creates a model from parameters and coefficient closures.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonPositiveMaturity`] when `params.maturity <= 0`,
    /// or any other [`ModelParameters::validate`] failure.
    pub fn new(
        params: ModelParameters,
        drift: D,
        diffusion: S,
        diffusion_derivative: DS,
    ) -> Result<Self, ModelError> {
        params.validate()?;
        Ok(Self {
            params,
            drift,
            diffusion,
            diffusion_derivative,
        })
    }
}

impl<D, S, DS> StochasticModel for GeneralSde<D, S, DS>
where
    D: Fn(f64, f64) -> f64 + Send + Sync,
    S: Fn(f64, f64) -> f64 + Send + Sync,
    DS: Fn(f64, f64) -> f64 + Send + Sync,
{
    #[inline]
    fn params(&self) -> &ModelParameters {
        &self.params
    }

    #[inline]
    fn drift(&self, t: f64, x: f64) -> f64 {
        (self.drift)(t, x)
    }

    #[inline]
    fn diffusion(&self, t: f64, x: f64) -> f64 {
        (self.diffusion)(t, x)
    }

    #[inline]
    fn diffusion_derivative(&self, t: f64, x: f64) -> f64 {
        (self.diffusion_derivative)(t, x)
    }
}

impl<D, S, DS> fmt::Debug for GeneralSde<D, S, DS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneralSde")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
