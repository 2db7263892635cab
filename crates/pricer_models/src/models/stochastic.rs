//! StochasticModel trait for one-factor SDEs.
//!
//! A model describes the process
//!
//! ```text
//! dX_t = a(t, X_t) dt + b(t, X_t) dW_t
//! ```
//!
//! through its drift `a`, diffusion `b` and the spatial derivative `∂b/∂x`.
//! The discretisation schemes only ever talk to this trait.
//!
//! ## Itô-corrected drift
//!
//! Higher-order schemes blend a corrected drift
//!
//! ```text
//! ā(t, x; B) = a(t, x) − B · b(t, x) · ∂b/∂x(t, x)
//! ```
//!
//! where `B` is the diffusion blending weight of the scheme. The derivative
//! must be consistent with the diffusion for the correction to mean anything;
//! this is a caller contract and is not checked.

use super::params::ModelParameters;

/// Unified coefficient interface for one-factor stochastic models.
///
/// Implementations are pure: every method is a function of its arguments and
/// the immutable parameters only. Models are shared read-only between
/// simulation workers, hence the `Send + Sync` bound.
///
/// # Example
/// ```
/// use pricer_models::models::{GbmSde, ModelParameters, StochasticModel};
///
/// let gbm = GbmSde::new(ModelParameters::default()).unwrap();
///
/// // a = r x, b = σ x, ∂b/∂x = σ
/// let corrected = gbm.drift_corrected(0.0, 100.0, 0.5);
/// assert!((corrected - (5.0 - 0.5 * 20.0 * 0.2)).abs() < 1e-12);
/// ```
pub trait StochasticModel: Send + Sync {
    /// Option and market parameters the model was built from.
    fn params(&self) -> &ModelParameters;

    /// Drift coefficient a(t, x).
    fn drift(&self, t: f64, x: f64) -> f64;

    /// Diffusion coefficient b(t, x).
    fn diffusion(&self, t: f64, x: f64) -> f64;

    /// Spatial derivative of the diffusion ∂b/∂x(t, x).
    fn diffusion_derivative(&self, t: f64, x: f64) -> f64;

    /// Itô-corrected drift `a(t,x) − B · b(t,x) · ∂b/∂x(t,x)`.
    #[inline]
    fn drift_corrected(&self, t: f64, x: f64, blend: f64) -> f64 {
        self.drift(t, x) - blend * self.diffusion(t, x) * self.diffusion_derivative(t, x)
    }

    /// Initial state S₀.
    #[inline]
    fn initial_value(&self) -> f64 {
        self.params().spot
    }

    /// Time to maturity T.
    #[inline]
    fn maturity(&self) -> f64 {
        self.params().maturity
    }
}
