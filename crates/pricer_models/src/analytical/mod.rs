//! Closed-form reference prices.
//!
//! The Monte Carlo engine is validated against these formulas:
//! - Black-Scholes-Merton with continuous dividend yield for European options
//! - Standard normal CDF/PDF via an erfc approximation

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::{black_scholes_price, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
