//! One-factor stochastic process models.
//!
//! This module provides the model layer of the Monte Carlo engine:
//! - [`ModelParameters`]: option and market data, read-only after construction
//! - [`StochasticModel`]: unified coefficient interface used by the schemes
//! - [`GeneralSde`]: coefficients supplied as closures
//! - [`GbmSde`]: geometric Brownian motion with continuous dividend yield
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{GeneralSde, ModelParameters, StochasticModel};
//!
//! let params = ModelParameters::builder()
//!     .strike(65.0)
//!     .maturity(0.25)
//!     .rate(0.08)
//!     .volatility(0.3)
//!     .spot(60.0)
//!     .build()
//!     .unwrap();
//!
//! let (r, sig) = (params.rate, params.volatility);
//! let sde = GeneralSde::new(
//!     params,
//!     move |_t, s| r * s,
//!     move |_t, s| sig * s,
//!     move |_t, _s| sig,
//! )
//! .unwrap();
//!
//! assert!((sde.drift(0.0, 60.0) - 4.8).abs() < 1e-12);
//! ```

pub mod error;
pub mod gbm;
pub mod general;
pub mod params;
pub mod stochastic;

pub use error::ModelError;
pub use gbm::GbmSde;
pub use general::GeneralSde;
pub use params::{ModelParameters, ModelParametersBuilder, OptionType};
pub use stochastic::StochasticModel;
