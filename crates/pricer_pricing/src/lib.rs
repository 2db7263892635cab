//! # Pricer Engine (Layer 3: Monte Carlo)
//!
//! Monte Carlo pricing of path-dependent payoffs under a one-factor SDE
//! `dX = a(t, X) dt + b(t, X) dW` supplied by `pricer_models`.
//!
//! ## Modules
//!
//! - [`scheme`]: time mesh, explicit Euler and predictor-corrector steps
//! - [`rng`]: seeded normal sources and per-worker streams
//! - [`mc`]: running statistics, path pricers, configuration and the
//!   simulation hub (sequential and partitioned parallel runs)
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pricer_models::models::{GbmSde, ModelParameters};
//! use pricer_models::payoff::{call, flat_discount};
//! use pricer_pricing::mc::{EuropeanPricer, MonteCarloConfig, SimulationHub};
//! use pricer_pricing::rng::PricerRng;
//! use pricer_pricing::scheme::PredictorCorrector;
//!
//! let params = ModelParameters::default();
//! let model = Arc::new(GbmSde::new(params).unwrap());
//! let scheme = PredictorCorrector::new(model, 100).unwrap();
//! let mut pricer = EuropeanPricer::new(call(params.strike), flat_discount(params.rate, params.maturity));
//!
//! let config = MonteCarloConfig::builder().n_paths(4_000).n_steps(100).build().unwrap();
//! let result = SimulationHub::builder()
//!     .scheme(&scheme)
//!     .pricer(&mut pricer)
//!     .config(config)
//!     .build()
//!     .unwrap()
//!     .run(&mut PricerRng::from_seed(7))
//!     .unwrap();
//!
//! println!("Price: {:.4} +/- {:.4}", result.price, result.confidence_95().unwrap());
//! ```
//!
//! ## Logging
//!
//! The engine emits `tracing` events: one `mc_run` span per run and
//! `debug` progress events every [`mc::PROGRESS_INTERVAL`] trials. Install a
//! subscriber in the binary to see them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
pub mod scheme;

pub use mc::{
    AsianPricer, EuropeanPricer, ExecutionMode, McError, MonteCarloConfig, PathPricer,
    PricingResult, SimulationHub,
};
pub use rng::{NormalSource, PricerRng, SeededStreams, SourceFactory};
pub use scheme::{DiscretisationScheme, ExplicitEuler, PredictorCorrector, Scheme, SchemeKind};
