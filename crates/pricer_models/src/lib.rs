//! # Pricer Models (L2: Business Logic)
//!
//! Option parameters, one-factor stochastic models and reference formulas.
//!
//! This crate provides:
//! - [`ModelParameters`](models::ModelParameters): immutable option and market data bundle
//! - [`StochasticModel`](models::StochasticModel): drift, diffusion and Itô-corrected drift
//! - [`GeneralSde`](models::GeneralSde): model whose coefficients are injected closures
//! - [`GbmSde`](models::GbmSde): geometric Brownian motion built from parameters
//! - Payoff and discount closures for the Monte Carlo engine
//! - Black-Scholes formulas for validating simulated prices
//!
//! ## Design Principles
//!
//! - **Capability injection**: coefficients and payoffs are plain closures, so a
//!   formula can be swapped without touching the engine
//! - **Static dispatch**: models are generic parameters of the schemes, never trait objects
//! - **Fail at construction**: a model with non-positive maturity cannot be built

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
pub mod payoff;

pub use models::{
    GbmSde, GeneralSde, ModelError, ModelParameters, OptionType, StochasticModel,
};
