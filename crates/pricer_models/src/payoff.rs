//! Payoff and discount closures for the Monte Carlo pricers.
//!
//! The pricers are formula-agnostic: they receive a payoff `Fn(f64) -> f64`
//! and a discount `Fn() -> f64`. The helpers here build the usual vanilla
//! closures; any other closure with the same shape works equally well.
//!
//! # Example
//! ```
//! use pricer_models::payoff::{call, flat_discount, put};
//!
//! let payoff_call = call(65.0);
//! let payoff_put = put(65.0);
//! let discount = flat_discount(0.08, 0.25);
//!
//! assert_eq!(payoff_call(70.0), 5.0);
//! assert_eq!(payoff_put(70.0), 0.0);
//! assert!((discount() - (-0.02_f64).exp()).abs() < 1e-15);
//! ```

use crate::models::{ModelParameters, OptionType};

/// Call payoff `max(s − K, 0)`.
#[inline]
pub fn call(strike: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |s| (s - strike).max(0.0)
}

/// Put payoff `max(K − s, 0)`.
#[inline]
pub fn put(strike: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |s| (strike - s).max(0.0)
}

/// Vanilla payoff selected by option type.
#[inline]
pub fn vanilla(option_type: OptionType, strike: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |s| option_type.intrinsic(s, strike)
}

/// Vanilla payoff of the option described by `params`.
#[inline]
pub fn from_params(params: &ModelParameters) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    vanilla(params.option_type, params.strike)
}

/// Discount closure `exp(−r T)` for a flat rate.
#[inline]
pub fn flat_discount(rate: f64, maturity: f64) -> impl Fn() -> f64 + Copy + Send + Sync {
    let df = (-rate * maturity).exp();
    move || df
}
