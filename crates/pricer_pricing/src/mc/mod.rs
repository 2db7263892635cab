//! Monte Carlo engine.
//!
//! # Architecture
//!
//! ```text
//! SimulationHub
//! ├── MonteCarloConfig     (trials, steps, seed, execution mode)
//! ├── DiscretisationScheme (model + mesh, borrowed)
//! ├── PathPricer           (payoff reduction + RunningStatistics, borrowed)
//! └── NormalSource         (one per worker)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pricer_models::models::{GbmSde, ModelParameters, OptionType};
//! use pricer_models::payoff::{flat_discount, put};
//! use pricer_pricing::mc::{AsianPricer, ExecutionMode, MonteCarloConfig, SimulationHub};
//! use pricer_pricing::scheme::SchemeKind;
//!
//! let params = ModelParameters::builder()
//!     .strike(65.0)
//!     .maturity(0.25)
//!     .rate(0.08)
//!     .volatility(0.3)
//!     .spot(60.0)
//!     .option_type(OptionType::Put)
//!     .build()
//!     .unwrap();
//!
//! let model = Arc::new(GbmSde::new(params).unwrap());
//! let scheme = SchemeKind::predictor_corrector().build(model, 100).unwrap();
//! let mut pricer = AsianPricer::new(put(65.0), flat_discount(0.08, 0.25));
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(5_000)
//!     .n_steps(100)
//!     .seed(42)
//!     .mode(ExecutionMode::Parallel { workers: 2 })
//!     .build()
//!     .unwrap();
//!
//! let result = SimulationHub::builder()
//!     .scheme(&scheme)
//!     .pricer(&mut pricer)
//!     .config(config)
//!     .build()
//!     .unwrap()
//!     .run_seeded()
//!     .unwrap();
//!
//! assert!(result.price > 0.0);
//! println!("Asian put: {:.4} +/- {:.4}", result.price, result.confidence_95().unwrap());
//! ```

pub mod config;
pub mod error;
pub mod hub;
pub mod paths;
pub mod pricer;
pub mod result;
pub mod stats;
pub mod summation;

pub use config::{ExecutionMode, MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::{ConfigError, McError, PricerError, StatsError};
pub use hub::{SimulationHub, SimulationHubBuilder, PROGRESS_INTERVAL};
pub use paths::fill_path;
pub use pricer::{AsianPricer, EuropeanPricer, PathPricer};
pub use result::PricingResult;
pub use stats::{Dispersion, RunningStatistics};
pub use summation::{compensated_mean, CompensatedSum};
