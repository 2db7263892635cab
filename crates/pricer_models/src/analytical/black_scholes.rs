//! Black-Scholes-Merton prices for European options on a dividend-paying asset.
//!
//! ```text
//! d1 = [ln(S/K) + (r − q + σ²/2) T] / (σ √T)
//! d2 = d1 − σ √T
//! C  = S e^{−qT} N(d1) − K e^{−rT} N(d2)
//! P  = K e^{−rT} N(−d2) − S e^{−qT} N(−d1)
//! ```

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::models::{ModelParameters, OptionType};

/// Expiries below this are priced at intrinsic value.
const EXPIRY_EPS: f64 = 1e-10;

/// Black-Scholes-Merton pricer.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// assert!((call - 10.4506).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    dividend: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a pricer.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticalError::InvalidSpot`] for `spot <= 0` and
    /// [`AnalyticalError::InvalidVolatility`] for `volatility <= 0`.
    pub fn new(spot: T, rate: T, dividend: T, volatility: T) -> Result<Self, AnalyticalError> {
        if spot.is_nan() || spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if volatility.is_nan() || volatility <= T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            spot,
            rate,
            dividend,
            volatility,
        })
    }

    /// d1 term.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap_or_else(T::zero);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        ((self.spot / strike).ln()
            + (self.rate - self.dividend + half * self.volatility * self.volatility) * expiry)
            / vol_sqrt_t
    }

    /// d2 term.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price.
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if expiry <= T::from(EXPIRY_EPS).unwrap_or_else(T::zero) {
            return (self.spot - strike).max(T::zero());
        }
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        self.spot * (-self.dividend * expiry).exp() * norm_cdf(d1)
            - strike * (-self.rate * expiry).exp() * norm_cdf(d2)
    }

    /// European put price.
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if expiry <= T::from(EXPIRY_EPS).unwrap_or_else(T::zero) {
            return (strike - self.spot).max(T::zero());
        }
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        strike * (-self.rate * expiry).exp() * norm_cdf(-d2)
            - self.spot * (-self.dividend * expiry).exp() * norm_cdf(-d1)
    }
}

/// Closed-form price of the European option described by `params`.
///
/// # Errors
///
/// Propagates [`BlackScholes::new`] failures.
pub fn black_scholes_price(params: &ModelParameters) -> Result<f64, AnalyticalError> {
    let bs = BlackScholes::new(params.spot, params.rate, params.dividend, params.volatility)?;
    Ok(match params.option_type {
        OptionType::Call => bs.price_call(params.strike, params.maturity),
        OptionType::Put => bs.price_put(params.strike, params.maturity),
    })
}
