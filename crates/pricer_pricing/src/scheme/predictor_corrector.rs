//! Predictor-corrector scheme with drift and diffusion blending.
//!
//! ```text
//! x̃       = x + a(t, x) dt + b(t, x) z1 √dt
//! drift    = [α ā(t+dt, x̃; β) + (1−α) ā(t, x; β)] dt
//! diff     = [β b(t+dt, x̃) + (1−β) b(t, x)] z1 √dt
//! x_{n+1}  = x + drift + diff
//! ```
//!
//! `ā` is the Itô-corrected drift of the model. `α = β = 0` recovers
//! explicit Euler.

use std::sync::Arc;

use pricer_models::models::StochasticModel;

use super::error::SchemeError;
use super::mesh::TimeMesh;
use super::DiscretisationScheme;

/// Default drift blending weight α.
pub const DEFAULT_ALPHA: f64 = 0.5;
/// Default diffusion blending weight β.
pub const DEFAULT_BETA: f64 = 0.5;

fn check_weight(name: &'static str, value: f64) -> Result<f64, SchemeError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SchemeError::InvalidBlendWeight { name, value })
    }
}

/// Predictor-corrector discretisation.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use pricer_models::models::{GbmSde, ModelParameters};
/// use pricer_pricing::scheme::{DiscretisationScheme, PredictorCorrector};
///
/// let model = Arc::new(GbmSde::new(ModelParameters::default()).unwrap());
/// let pc = PredictorCorrector::new(model, 250).unwrap();
/// assert_eq!(pc.alpha(), 0.5);
/// assert_eq!(pc.mesh().len(), 251);
/// ```
#[derive(Debug)]
pub struct PredictorCorrector<M> {
    model: Arc<M>,
    mesh: TimeMesh,
    alpha: f64,
    beta: f64,
}

impl<M: StochasticModel> PredictorCorrector<M> {
    /// Creates the scheme with the default weights α = β = 0.5.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError`] when the mesh cannot be built.
    pub fn new(model: Arc<M>, n_steps: usize) -> Result<Self, SchemeError> {
        Self::with_weights(model, n_steps, DEFAULT_ALPHA, DEFAULT_BETA)
    }

    /// Creates the scheme with explicit weights.
    ///
    /// # Errors
    ///
    /// [`SchemeError::InvalidBlendWeight`] when α or β lies outside `[0, 1]`,
    /// otherwise any mesh construction error.
    pub fn with_weights(
        model: Arc<M>,
        n_steps: usize,
        alpha: f64,
        beta: f64,
    ) -> Result<Self, SchemeError> {
        let alpha = check_weight("alpha", alpha)?;
        let beta = check_weight("beta", beta)?;
        let mesh = TimeMesh::new(model.maturity(), n_steps)?;
        Ok(Self {
            model,
            mesh,
            alpha,
            beta,
        })
    }

    /// Drift blending weight α.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Diffusion blending weight β.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl<M> Clone for PredictorCorrector<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            mesh: self.mesh.clone(),
            alpha: self.alpha,
            beta: self.beta,
        }
    }
}

impl<M: StochasticModel> DiscretisationScheme for PredictorCorrector<M> {
    type Model = M;

    #[inline]
    fn model(&self) -> &M {
        &self.model
    }

    #[inline]
    fn mesh(&self) -> &TimeMesh {
        &self.mesh
    }

    #[inline]
    fn next(&self, x: f64, t: f64, dt: f64, z1: f64, _z2: f64) -> f64 {
        let m = &*self.model;
        let sqrt_dt = dt.sqrt();
        let t_next = t + dt;

        let b_now = m.diffusion(t, x);
        let predicted = x + m.drift(t, x) * dt + b_now * z1 * sqrt_dt;

        let drift = (self.alpha * m.drift_corrected(t_next, predicted, self.beta)
            + (1.0 - self.alpha) * m.drift_corrected(t, x, self.beta))
            * dt;
        let diffusion =
            (self.beta * m.diffusion(t_next, predicted) + (1.0 - self.beta) * b_now) * z1 * sqrt_dt;

        x + drift + diffusion
    }

    fn name(&self) -> &'static str {
        "predictor-corrector"
    }
}
