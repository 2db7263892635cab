//! Explicit Euler-Maruyama scheme.
//!
//! ```text
//! x_{n+1} = x_n + a(t_n, x_n) dt + b(t_n, x_n) z1 √dt
//! ```

use std::sync::Arc;

use pricer_models::models::StochasticModel;

use super::error::SchemeError;
use super::mesh::TimeMesh;
use super::DiscretisationScheme;

/// Euler-Maruyama discretisation over a uniform mesh.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use pricer_models::models::{GbmSde, ModelParameters};
/// use pricer_pricing::scheme::{DiscretisationScheme, ExplicitEuler};
///
/// let model = Arc::new(GbmSde::new(ModelParameters::default()).unwrap());
/// let euler = ExplicitEuler::new(model, 100).unwrap();
///
/// let x1 = euler.next(100.0, 0.0, euler.dt(), 0.0, 0.0);
/// assert!((x1 - 100.0 * (1.0 + 0.05 * 0.01)).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct ExplicitEuler<M> {
    model: Arc<M>,
    mesh: TimeMesh,
}

impl<M: StochasticModel> ExplicitEuler<M> {
    /// Creates the scheme and its mesh over the model horizon.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError`] when the mesh cannot be built.
    pub fn new(model: Arc<M>, n_steps: usize) -> Result<Self, SchemeError> {
        let mesh = TimeMesh::new(model.maturity(), n_steps)?;
        Ok(Self { model, mesh })
    }
}

impl<M> Clone for ExplicitEuler<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            mesh: self.mesh.clone(),
        }
    }
}

impl<M: StochasticModel> DiscretisationScheme for ExplicitEuler<M> {
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
        x + self.model.drift(t, x) * dt + self.model.diffusion(t, x) * z1 * dt.sqrt()
    }

    fn name(&self) -> &'static str {
        "explicit-euler"
    }
}
