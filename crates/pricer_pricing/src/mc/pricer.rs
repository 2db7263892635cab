//! Path pricers: payoff of one simulated path folded into running statistics.
//!
//! A pricer owns two injected closures, the payoff `Fn(f64) -> f64` and the
//! discount `Fn() -> f64`, plus its [`RunningStatistics`]. The variants differ
//! only in how a path is reduced to the payoff argument:
//!
//! | Pricer | Payoff argument |
//! |--------|-----------------|
//! | [`EuropeanPricer`] | last point |
//! | [`AsianPricer`] | arithmetic mean of every point except the last |

use std::fmt;

use super::error::{PricerError, StatsError};
use super::stats::{Dispersion, RunningStatistics};
use super::summation::compensated_mean;

/// Consumes completed paths and produces a discounted price.
///
/// Implementors supply the path reduction, the discount factor and access to
/// their statistics; accumulation, merging and finalisation are provided.
/// `Sync` because workers read the payoff closure concurrently.
pub trait PathPricer: Sync {
    /// Payoff of one path. Pure: does not touch the statistics.
    fn path_payoff(&self, path: &[f64]) -> Result<f64, PricerError>;

    /// Discount factor applied at finalisation.
    fn discount_factor(&self) -> f64;

    /// Accumulated statistics.
    fn statistics(&self) -> &RunningStatistics;

    /// Mutable access to the accumulated statistics.
    fn statistics_mut(&mut self) -> &mut RunningStatistics;

    /// Computes the payoff of `path` and records it.
    #[inline]
    fn consume(&mut self, path: &[f64]) -> Result<(), PricerError> {
        let payoff = self.path_payoff(path)?;
        self.statistics_mut().record(payoff)?;
        Ok(())
    }

    /// Merges a partition accumulated elsewhere (e.g. by a worker).
    fn absorb(&mut self, partition: &RunningStatistics) -> Result<(), PricerError> {
        self.statistics_mut().merge(partition)?;
        Ok(())
    }

    /// Applies the discount factor exactly once and returns the price.
    fn finalize(&mut self) -> Result<f64, PricerError> {
        let df = self.discount_factor();
        Ok(self.statistics_mut().finalize(df)?)
    }

    /// Finalised price, 0 if nothing was finalised yet.
    fn price(&self) -> f64 {
        self.statistics().price()
    }

    /// Standard deviation and standard error of the recorded payoffs.
    fn dispersion(&self) -> Result<Dispersion, StatsError> {
        self.statistics().dispersion()
    }

    /// Clears the statistics so the pricer can run again.
    fn reset(&mut self) {
        self.statistics_mut().reset();
    }
}

/// Terminal-value pricer: payoff of the last path point.
///
/// # Example
///
/// ```
/// use pricer_pricing::mc::{EuropeanPricer, PathPricer};
///
/// let mut pricer = EuropeanPricer::new(|s: f64| (s - 100.0).max(0.0), || 1.0);
/// pricer.consume(&[100.0, 105.0, 110.0, 115.0, 120.0]).unwrap();
/// assert_eq!(pricer.finalize().unwrap(), 20.0);
/// ```
pub struct EuropeanPricer<P, D> {
    payoff: P,
    discount: D,
    stats: RunningStatistics,
}

impl<P, D> EuropeanPricer<P, D>
where
    P: Fn(f64) -> f64 + Sync,
    D: Fn() -> f64 + Sync,
{
    /// Pricer with the given payoff and discount closures.
    pub fn new(payoff: P, discount: D) -> Self {
        Self {
            payoff,
            discount,
            stats: RunningStatistics::new(),
        }
    }
}

impl<P, D> PathPricer for EuropeanPricer<P, D>
where
    P: Fn(f64) -> f64 + Sync,
    D: Fn() -> f64 + Sync,
{
    #[inline]
    fn path_payoff(&self, path: &[f64]) -> Result<f64, PricerError> {
        path.last()
            .map(|&terminal| (self.payoff)(terminal))
            .ok_or(PricerError::EmptyPath)
    }

    fn discount_factor(&self) -> f64 {
        (self.discount)()
    }

    fn statistics(&self) -> &RunningStatistics {
        &self.stats
    }

    fn statistics_mut(&mut self) -> &mut RunningStatistics {
        &mut self.stats
    }
}

impl<P, D> fmt::Debug for EuropeanPricer<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EuropeanPricer")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Path-average pricer: payoff of the arithmetic mean of the path, final
/// point excluded.
///
/// For a path `[S0, S1, ..., S_NT]` the averaging window is `S0..S_{NT-1}`.
/// A single-point path averages that point.
///
/// # Example
///
/// ```
/// use pricer_pricing::mc::{AsianPricer, PathPricer};
///
/// let pricer = AsianPricer::new(|s: f64| (s - 100.0).max(0.0), || 1.0);
/// let payoff = pricer.path_payoff(&[100.0, 105.0, 110.0, 115.0, 120.0]).unwrap();
/// assert_eq!(payoff, 7.5);
/// ```
pub struct AsianPricer<P, D> {
    payoff: P,
    discount: D,
    stats: RunningStatistics,
}

impl<P, D> AsianPricer<P, D>
where
    P: Fn(f64) -> f64 + Sync,
    D: Fn() -> f64 + Sync,
{
    /// Pricer with the given payoff and discount closures.
    pub fn new(payoff: P, discount: D) -> Self {
        Self {
            payoff,
            discount,
            stats: RunningStatistics::new(),
        }
    }

    /// Averaging window of `path`.
    #[inline]
    fn window(path: &[f64]) -> &[f64] {
        match path.len() {
            0 | 1 => path,
            n => &path[..n - 1],
        }
    }
}

impl<P, D> PathPricer for AsianPricer<P, D>
where
    P: Fn(f64) -> f64 + Sync,
    D: Fn() -> f64 + Sync,
{
    #[inline]
    fn path_payoff(&self, path: &[f64]) -> Result<f64, PricerError> {
        compensated_mean(Self::window(path))
            .map(|average| (self.payoff)(average))
            .ok_or(PricerError::EmptyPath)
    }

    fn discount_factor(&self) -> f64 {
        (self.discount)()
    }

    fn statistics(&self) -> &RunningStatistics {
        &self.stats
    }

    fn statistics_mut(&mut self) -> &mut RunningStatistics {
        &mut self.stats
    }
}

impl<P, D> fmt::Debug for AsianPricer<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsianPricer")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PATH: [f64; 5] = [100.0, 105.0, 110.0, 115.0, 120.0];

    fn call(s: f64) -> f64 {
        (s - 100.0).max(0.0)
    }

    fn df() -> f64 {
        (-0.05_f64).exp()
    }

    #[test]
    fn test_european_single_trial() {
        let mut pricer = EuropeanPricer::new(call, df);
        pricer.consume(&PATH).unwrap();
        let price = pricer.finalize().unwrap();
        assert_relative_eq!(price, df() * 20.0, epsilon = 1e-12);
        assert_relative_eq!(pricer.price(), df() * 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_asian_excludes_last_point() {
        let mut pricer = AsianPricer::new(call, df);
        pricer.consume(&PATH).unwrap();
        assert_relative_eq!(pricer.finalize().unwrap(), df() * 7.5, epsilon = 1e-12);
    }

    #[test]
    fn test_asian_single_point_path() {
        let pricer = AsianPricer::new(call, df);
        assert_eq!(pricer.path_payoff(&[130.0]).unwrap(), 30.0);
    }

    #[test]
    fn test_empty_path() {
        let european = EuropeanPricer::new(call, df);
        let asian = AsianPricer::new(call, df);
        assert_eq!(european.path_payoff(&[]), Err(PricerError::EmptyPath));
        assert_eq!(asian.path_payoff(&[]), Err(PricerError::EmptyPath));
    }

    #[test]
    fn test_price_zero_before_trials() {
        let mut pricer = EuropeanPricer::new(call, df);
        assert_eq!(pricer.price(), 0.0);
        assert_eq!(pricer.finalize().unwrap(), 0.0);
    }

    #[test]
    fn test_consume_after_finalize_rejected() {
        let mut pricer = EuropeanPricer::new(call, df);
        pricer.consume(&PATH).unwrap();
        pricer.finalize().unwrap();
        assert_eq!(
            pricer.consume(&PATH),
            Err(PricerError::Stats(StatsError::AlreadyFinalised))
        );
        assert_eq!(
            pricer.finalize(),
            Err(PricerError::Stats(StatsError::AlreadyFinalised))
        );

        pricer.reset();
        pricer.consume(&PATH).unwrap();
        assert_eq!(pricer.statistics().count(), 1);
    }

    #[test]
    fn test_dispersion_over_terminal_values() {
        let mut pricer = EuropeanPricer::new(call, || 1.0);
        for terminal in [100.0, 120.0, 140.0] {
            pricer.consume(&[100.0, terminal]).unwrap();
        }
        let d = pricer.dispersion().unwrap();
        let std_dev = (800.0_f64 / 3.0).sqrt();
        assert_relative_eq!(d.std_dev, std_dev, epsilon = 1e-12);
        assert_relative_eq!(d.std_error, std_dev / 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_dispersion_insufficient_data() {
        let mut pricer = AsianPricer::new(call, df);
        pricer.consume(&PATH).unwrap();
        assert_eq!(
            pricer.dispersion(),
            Err(StatsError::InsufficientData { count: 1 })
        );
    }

    #[test]
    fn test_absorb_partitions() {
        let mut partition = RunningStatistics::new();
        partition.record(20.0).unwrap();
        partition.record(40.0).unwrap();

        let mut pricer = EuropeanPricer::new(call, || 0.5);
        pricer.consume(&PATH).unwrap();
        pricer.absorb(&partition).unwrap();

        assert_eq!(pricer.statistics().count(), 3);
        assert_relative_eq!(pricer.finalize().unwrap(), 0.5 * 80.0 / 3.0, epsilon = 1e-12);
    }
}
