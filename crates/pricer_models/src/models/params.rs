//! Option and market parameters shared by every model.

use super::error::ModelError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Option right.
///
/// The integer flag convention is `1 == call`, `-1 == put`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Parses the integer flag convention (`1` call, `-1` put).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidOptionFlag`] for any other value.
    pub fn from_flag(flag: i32) -> Result<Self, ModelError> {
        match flag {
            1 => Ok(OptionType::Call),
            -1 => Ok(OptionType::Put),
            other => Err(ModelError::InvalidOptionFlag(other)),
        }
    }

    /// Returns the integer flag (`1` call, `-1` put).
    #[inline]
    pub fn flag(&self) -> i32 {
        match self {
            OptionType::Call => 1,
            OptionType::Put => -1,
        }
    }

    /// Intrinsic value `max(±(s - strike), 0)`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Immutable bundle of option and market data.
///
/// Owned by a stochastic model and read-only once the model is built. The
/// barrier and CEV fields are carried for model extensions; the
/// discretisation schemes never read them.
///
/// # Examples
///
/// ```
/// use pricer_models::models::{ModelParameters, OptionType};
///
/// let params = ModelParameters::builder()
///     .strike(100.0)
///     .maturity(1.0)
///     .rate(0.05)
///     .volatility(0.2)
///     .spot(100.0)
///     .option_type(OptionType::Put)
///     .build()
///     .unwrap();
///
/// assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelParameters {
    /// Strike price K
    pub strike: f64,
    /// Time to maturity T in years
    pub maturity: f64,
    /// Continuously compounded risk-free rate r
    pub rate: f64,
    /// Volatility σ
    pub volatility: f64,
    /// Continuous dividend yield q
    pub dividend: f64,
    /// Initial value of the underlying S₀
    pub spot: f64,
    /// Call or put
    pub option_type: OptionType,
    /// Down-and-out barrier level H
    pub barrier: Option<f64>,
    /// Elasticity β of a CEV diffusion
    pub cev_beta: Option<f64>,
    /// Scale factor of a CEV diffusion
    pub cev_scale: Option<f64>,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            dividend: 0.0,
            spot: 100.0,
            option_type: OptionType::Call,
            barrier: None,
            cev_beta: None,
            cev_scale: None,
        }
    }
}

impl ModelParameters {
    /// Creates validated parameters for a call.
    ///
    /// # Errors
    ///
    /// See [`ModelParameters::validate`].
    pub fn new(
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        dividend: f64,
        spot: f64,
    ) -> Result<Self, ModelError> {
        let params = Self {
            strike,
            maturity,
            rate,
            volatility,
            dividend,
            spot,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Creates a new parameter builder seeded with the defaults.
    #[inline]
    pub fn builder() -> ModelParametersBuilder {
        ModelParametersBuilder::default()
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if:
    /// - `maturity` is not strictly positive
    /// - `volatility` is negative or not finite
    /// - `spot`, `strike`, `rate` or `dividend` is not finite, or `strike` is negative
    /// - `barrier` is present and not strictly positive
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(ModelError::NonPositiveMaturity {
                maturity: self.maturity,
            });
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(ModelError::InvalidParameter {
                name: "volatility",
                value: self.volatility,
                reason: "must be finite and non-negative",
            });
        }
        if !self.strike.is_finite() || self.strike < 0.0 {
            return Err(ModelError::InvalidParameter {
                name: "strike",
                value: self.strike,
                reason: "must be finite and non-negative",
            });
        }
        for (name, value) in [
            ("spot", self.spot),
            ("rate", self.rate),
            ("dividend", self.dividend),
        ] {
            if !value.is_finite() {
                return Err(ModelError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        if let Some(barrier) = self.barrier {
            if barrier.is_nan() || barrier <= 0.0 {
                return Err(ModelError::InvalidParameter {
                    name: "barrier",
                    value: barrier,
                    reason: "must be positive",
                });
            }
        }
        Ok(())
    }

    /// Discount factor `exp(-r T)` to present value at maturity.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Intrinsic payoff of this option at underlying value `s`.
    #[inline]
    pub fn payoff(&self, s: f64) -> f64 {
        self.option_type.intrinsic(s, self.strike)
    }
}

/// Builder for [`ModelParameters`].
///
/// Unset fields keep the values of [`ModelParameters::default`].
#[derive(Clone, Debug, Default)]
pub struct ModelParametersBuilder {
    params: ModelParameters,
}

impl ModelParametersBuilder {
    /// Sets the strike K.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.params.strike = strike;
        self
    }

    /// Sets the time to maturity T.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.params.maturity = maturity;
        self
    }

    /// Sets the risk-free rate r.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.params.rate = rate;
        self
    }

    /// Sets the volatility σ.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.params.volatility = volatility;
        self
    }

    /// Sets the dividend yield q.
    #[inline]
    pub fn dividend(mut self, dividend: f64) -> Self {
        self.params.dividend = dividend;
        self
    }

    /// Sets the initial value S₀.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.params.spot = spot;
        self
    }

    /// Sets the option right.
    #[inline]
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.params.option_type = option_type;
        self
    }

    /// Sets the down-and-out barrier.
    #[inline]
    pub fn barrier(mut self, barrier: f64) -> Self {
        self.params.barrier = Some(barrier);
        self
    }

    /// Sets the CEV elasticity and scale.
    #[inline]
    pub fn cev(mut self, beta: f64, scale: f64) -> Self {
        self.params.cev_beta = Some(beta);
        self.params.cev_scale = Some(scale);
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    ///
    /// See [`ModelParameters::validate`].
    pub fn build(self) -> Result<ModelParameters, ModelError> {
        self.params.validate()?;
        Ok(self.params)
    }
}
