//! Time discretisation of one-factor SDEs.
//!
//! A scheme owns a shared model and a uniform [`TimeMesh`] and advances a
//! state by one step given two independent standard normal draws.
//!
//! ## Module Structure
//!
//! - [`mesh`]: uniform grid on `[0, T]`
//! - [`euler`]: explicit Euler-Maruyama
//! - [`predictor_corrector`]: blended predictor-corrector
//! - [`kind`]: serialisable selection and the static dispatch enum

pub mod error;
pub mod euler;
pub mod kind;
pub mod mesh;
pub mod predictor_corrector;

pub use error::SchemeError;
pub use euler::ExplicitEuler;
pub use kind::{Scheme, SchemeKind};
pub use mesh::TimeMesh;
pub use predictor_corrector::PredictorCorrector;

use pricer_models::models::StochasticModel;

/// One-step transition `x_{n+1} = next(x_n, t_n, dt, z1, z2)`.
///
/// Schemes are shared read-only between simulation workers. `z1` drives the
/// diffusion; `z2` is a second independent draw available to schemes that
/// need one and ignored by the built-in ones.
pub trait DiscretisationScheme: Send + Sync {
    /// Model being discretised.
    type Model: StochasticModel;

    /// The model.
    fn model(&self) -> &Self::Model;

    /// The time grid built at construction.
    fn mesh(&self) -> &TimeMesh;

    /// Advances `x` from `t` to `t + dt`.
    fn next(&self, x: f64, t: f64, dt: f64, z1: f64, z2: f64) -> f64;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Step size.
    #[inline]
    fn dt(&self) -> f64 {
        self.mesh().dt()
    }

    /// Number of steps per path.
    #[inline]
    fn n_steps(&self) -> usize {
        self.mesh().n_steps()
    }
}
