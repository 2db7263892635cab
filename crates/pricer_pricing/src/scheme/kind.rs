//! Static dispatch over the available schemes.
//!
//! [`SchemeKind`] is the serialisable selection (configuration files, CLI);
//! [`Scheme`] is the built scheme. Dispatch goes through `match`, so the
//! simulation loop stays monomorphic.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pricer_models::models::{GbmSde, ModelParameters};
//! use pricer_pricing::scheme::{DiscretisationScheme, SchemeKind};
//!
//! let model = Arc::new(GbmSde::new(ModelParameters::default()).unwrap());
//! let scheme = SchemeKind::predictor_corrector().build(model, 100).unwrap();
//! assert_eq!(scheme.name(), "predictor-corrector");
//! ```

use std::fmt;
use std::sync::Arc;

use pricer_models::models::StochasticModel;

use super::error::SchemeError;
use super::euler::ExplicitEuler;
use super::mesh::TimeMesh;
use super::predictor_corrector::{PredictorCorrector, DEFAULT_ALPHA, DEFAULT_BETA};
use super::DiscretisationScheme;

/// Scheme selection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum SchemeKind {
    /// Explicit Euler-Maruyama.
    Euler,
    /// Predictor-corrector with drift weight `alpha` and diffusion weight `beta`.
    PredictorCorrector {
        /// Drift blending weight α
        #[cfg_attr(feature = "serde", serde(default = "default_alpha"))]
        alpha: f64,
        /// Diffusion blending weight β
        #[cfg_attr(feature = "serde", serde(default = "default_beta"))]
        beta: f64,
    },
}

#[cfg(feature = "serde")]
fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

#[cfg(feature = "serde")]
fn default_beta() -> f64 {
    DEFAULT_BETA
}

impl Default for SchemeKind {
    fn default() -> Self {
        Self::predictor_corrector()
    }
}

impl SchemeKind {
    /// Predictor-corrector with the default weights.
    pub fn predictor_corrector() -> Self {
        Self::PredictorCorrector {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
        }
    }

    /// Builds the selected scheme for `model`.
    ///
    /// # Errors
    ///
    /// Propagates the constructor's [`SchemeError`].
    pub fn build<M: StochasticModel>(
        self,
        model: Arc<M>,
        n_steps: usize,
    ) -> Result<Scheme<M>, SchemeError> {
        match self {
            Self::Euler => ExplicitEuler::new(model, n_steps).map(Scheme::Euler),
            Self::PredictorCorrector { alpha, beta } => {
                PredictorCorrector::with_weights(model, n_steps, alpha, beta)
                    .map(Scheme::PredictorCorrector)
            }
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Euler => write!(f, "euler"),
            Self::PredictorCorrector { alpha, beta } => {
                write!(f, "predictor-corrector(alpha={}, beta={})", alpha, beta)
            }
        }
    }
}

/// A built scheme of any supported kind.
#[derive(Debug)]
pub enum Scheme<M> {
    /// Explicit Euler
    Euler(ExplicitEuler<M>),
    /// Predictor-corrector
    PredictorCorrector(PredictorCorrector<M>),
}

impl<M> Clone for Scheme<M> {
    fn clone(&self) -> Self {
        match self {
            Scheme::Euler(s) => Scheme::Euler(s.clone()),
            Scheme::PredictorCorrector(s) => Scheme::PredictorCorrector(s.clone()),
        }
    }
}

impl<M: StochasticModel> DiscretisationScheme for Scheme<M> {
    type Model = M;

    #[inline]
    fn model(&self) -> &M {
        match self {
            Scheme::Euler(s) => s.model(),
            Scheme::PredictorCorrector(s) => s.model(),
        }
    }

    #[inline]
    fn mesh(&self) -> &TimeMesh {
        match self {
            Scheme::Euler(s) => s.mesh(),
            Scheme::PredictorCorrector(s) => s.mesh(),
        }
    }

    #[inline]
    fn next(&self, x: f64, t: f64, dt: f64, z1: f64, z2: f64) -> f64 {
        match self {
            Scheme::Euler(s) => s.next(x, t, dt, z1, z2),
            Scheme::PredictorCorrector(s) => s.next(x, t, dt, z1, z2),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Scheme::Euler(s) => s.name(),
            Scheme::PredictorCorrector(s) => s.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::models::{GbmSde, ModelParameters};

    fn model() -> Arc<GbmSde> {
        Arc::new(GbmSde::new(ModelParameters::default()).unwrap())
    }

    #[test]
    fn test_build_dispatches() {
        let euler = SchemeKind::Euler.build(model(), 10).unwrap();
        assert!(matches!(euler, Scheme::Euler(_)));
        assert_eq!(euler.name(), "explicit-euler");

        let pc = SchemeKind::default().build(model(), 10).unwrap();
        assert!(matches!(pc, Scheme::PredictorCorrector(_)));
        assert_eq!(pc.n_steps(), 10);
    }

    #[test]
    fn test_build_propagates_errors() {
        let kind = SchemeKind::PredictorCorrector {
            alpha: 0.5,
            beta: 2.0,
        };
        assert!(matches!(
            kind.build(model(), 10),
            Err(SchemeError::InvalidBlendWeight { name: "beta", .. })
        ));
        assert_eq!(
            SchemeKind::Euler.build(model(), 0).unwrap_err(),
            SchemeError::InvalidStepCount(0)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(SchemeKind::Euler.to_string(), "euler");
        assert_eq!(
            SchemeKind::default().to_string(),
            "predictor-corrector(alpha=0.5, beta=0.5)"
        );
    }
}
