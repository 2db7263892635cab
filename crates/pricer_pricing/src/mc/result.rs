//! Outcome of a Monte Carlo run.

use super::stats::Dispersion;

/// Price estimate of a finished run.
///
/// `dispersion` describes the undiscounted payoffs and is `None` when fewer
/// than two trials were run. [`std_error`](Self::std_error) and the
/// confidence half-widths are on the scale of `price`, i.e. scaled by
/// `discount_factor`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{Dispersion, PricingResult};
///
/// let result = PricingResult {
///     price: 5.85,
///     n_paths: 50_000,
///     discount_factor: 0.98,
///     dispersion: Some(Dispersion { std_dev: 4.1, std_error: 0.018 }),
/// };
///
/// assert!((result.std_error().unwrap() - 0.98 * 0.018).abs() < 1e-15);
/// println!("Price: {} +/- {}", result.price, result.confidence_95().unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Number of trials that contributed.
    pub n_paths: usize,
    /// Discount factor applied to the mean payoff.
    pub discount_factor: f64,
    /// Standard deviation and standard error of the undiscounted payoffs.
    pub dispersion: Option<Dispersion>,
}

impl PricingResult {
    /// Standard error of `price`.
    #[inline]
    pub fn std_error(&self) -> Option<f64> {
        self.dispersion.map(|d| d.std_error * self.discount_factor)
    }

    /// 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> Option<f64> {
        self.std_error().map(|se| 1.96 * se)
    }

    /// 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> Option<f64> {
        self.std_error().map(|se| 2.576 * se)
    }
}
