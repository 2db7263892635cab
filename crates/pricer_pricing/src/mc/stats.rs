//! Running payoff statistics.
//!
//! Only three numbers are kept per partition: the trial count, the sum of
//! payoffs and the sum of squared payoffs. All three combine by addition, so
//! partitions built on different workers merge exactly into the statistics
//! of the pooled sample.

use super::error::StatsError;

/// Standard deviation of per-trial payoffs and standard error of their mean.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dispersion {
    /// Population standard deviation of the (undiscounted) payoffs.
    pub std_dev: f64,
    /// `std_dev / sqrt(N)`.
    pub std_error: f64,
}

/// Count, sum and sum of squares of recorded payoffs, plus the finalised price.
///
/// # Example
///
/// ```
/// use pricer_pricing::mc::RunningStatistics;
///
/// let mut stats = RunningStatistics::new();
/// for payoff in [0.0, 20.0, 40.0] {
///     stats.record(payoff).unwrap();
/// }
/// let price = stats.finalize(1.0).unwrap();
/// assert_eq!(price, 20.0);
///
/// let d = stats.dispersion().unwrap();
/// assert!((d.std_dev - (800.0_f64 / 3.0).sqrt()).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunningStatistics {
    count: u64,
    sum: f64,
    sum_sq: f64,
    price: Option<f64>,
}

impl RunningStatistics {
    /// Empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one payoff in.
    ///
    /// # Errors
    ///
    /// [`StatsError::AlreadyFinalised`] after [`finalize`](Self::finalize).
    #[inline]
    pub fn record(&mut self, payoff: f64) -> Result<(), StatsError> {
        self.ensure_open()?;
        self.count += 1;
        self.sum += payoff;
        self.sum_sq += payoff * payoff;
        Ok(())
    }

    /// Adds another partition's count and sums.
    ///
    /// # Errors
    ///
    /// [`StatsError::AlreadyFinalised`] if either side is finalised.
    pub fn merge(&mut self, other: &RunningStatistics) -> Result<(), StatsError> {
        self.ensure_open()?;
        other.ensure_open()?;
        self.count += other.count;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        Ok(())
    }

    /// Sets `price = discount_factor * sum / count` and freezes the statistics.
    ///
    /// With no trials the price is 0.
    ///
    /// # Errors
    ///
    /// [`StatsError::AlreadyFinalised`] on a second call.
    pub fn finalize(&mut self, discount_factor: f64) -> Result<f64, StatsError> {
        self.ensure_open()?;
        let price = match self.mean() {
            Some(mean) => discount_factor * mean,
            None => 0.0,
        };
        self.price = Some(price);
        Ok(price)
    }

    /// Clears everything, including the finalised price.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Finalised price, 0 before finalisation.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Whether [`finalize`](Self::finalize) has run.
    #[inline]
    pub fn is_finalised(&self) -> bool {
        self.price.is_some()
    }

    /// Trials recorded.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of payoffs.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Sum of squared payoffs.
    #[inline]
    pub fn sum_sq(&self) -> f64 {
        self.sum_sq
    }

    /// Undiscounted mean payoff, `None` without trials.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// `std_dev = sqrt(E[X²] − E[X]²)`, `std_error = std_dev / sqrt(N)`.
    ///
    /// Round-off can push the variance slightly below zero for near-constant
    /// payoffs; it is clamped to zero.
    ///
    /// # Errors
    ///
    /// [`StatsError::InsufficientData`] when fewer than two trials were recorded.
    pub fn dispersion(&self) -> Result<Dispersion, StatsError> {
        if self.count < 2 {
            return Err(StatsError::InsufficientData { count: self.count });
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = (self.sum_sq / n - mean * mean).max(0.0);
        let std_dev = variance.sqrt();
        Ok(Dispersion {
            std_dev,
            std_error: std_dev / n.sqrt(),
        })
    }

    #[inline]
    fn ensure_open(&self) -> Result<(), StatsError> {
        if self.price.is_some() {
            Err(StatsError::AlreadyFinalised)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn from_payoffs(payoffs: &[f64]) -> RunningStatistics {
        let mut stats = RunningStatistics::new();
        for &p in payoffs {
            stats.record(p).unwrap();
        }
        stats
    }

    #[test]
    fn test_dispersion_hand_sample() {
        let stats = from_payoffs(&[0.0, 20.0, 40.0]);
        let d = stats.dispersion().unwrap();

        // E[X²] = 2000/3, E[X]² = 400
        let std_dev = (2000.0_f64 / 3.0 - 400.0).sqrt();
        assert_relative_eq!(d.std_dev, std_dev, epsilon = 1e-12);
        assert_relative_eq!(d.std_error, std_dev / 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_dispersion_needs_two_trials() {
        assert_eq!(
            RunningStatistics::new().dispersion(),
            Err(StatsError::InsufficientData { count: 0 })
        );
        assert_eq!(
            from_payoffs(&[5.0]).dispersion(),
            Err(StatsError::InsufficientData { count: 1 })
        );
    }

    #[test]
    fn test_constant_payoffs_have_zero_dispersion() {
        let stats = from_payoffs(&[0.1; 1000]);
        let d = stats.dispersion().unwrap();
        assert!(d.std_dev >= 0.0);
        assert!(d.std_dev < 1e-6);
    }

    #[test]
    fn test_finalize_applies_discount_once() {
        let mut stats = from_payoffs(&[20.0]);
        let df = (-0.05_f64).exp();
        assert_relative_eq!(stats.finalize(df).unwrap(), df * 20.0);
        assert_relative_eq!(stats.price(), df * 20.0);

        assert_eq!(stats.finalize(df), Err(StatsError::AlreadyFinalised));
        assert_eq!(stats.record(1.0), Err(StatsError::AlreadyFinalised));
        assert_relative_eq!(stats.price(), df * 20.0);
    }

    #[test]
    fn test_price_zero_without_trials() {
        let mut stats = RunningStatistics::new();
        assert_eq!(stats.price(), 0.0);
        assert_eq!(stats.finalize(0.9).unwrap(), 0.0);
    }

    #[test]
    fn test_reset_reopens() {
        let mut stats = from_payoffs(&[1.0, 2.0]);
        stats.finalize(1.0).unwrap();
        stats.reset();
        assert!(!stats.is_finalised());
        assert_eq!(stats.count(), 0);
        stats.record(3.0).unwrap();
        assert_eq!(stats.mean(), Some(3.0));
    }

    #[test]
    fn test_merge_rejects_finalised() {
        let mut done = from_payoffs(&[1.0]);
        done.finalize(1.0).unwrap();
        let mut open = from_payoffs(&[2.0]);
        assert_eq!(open.merge(&done), Err(StatsError::AlreadyFinalised));
        assert_eq!(done.merge(&open.clone()), Err(StatsError::AlreadyFinalised));
    }

    proptest! {
        #[test]
        fn prop_merge_matches_single_partition(
            payoffs in prop::collection::vec(0.0_f64..200.0, 2..400),
            split in 0_usize..400,
        ) {
            let split = split.min(payoffs.len());
            let mut whole = from_payoffs(&payoffs);
            let mut left = from_payoffs(&payoffs[..split]);
            let right = from_payoffs(&payoffs[split..]);
            left.merge(&right).unwrap();

            prop_assert_eq!(left.count(), whole.count());
            let dl = left.dispersion().unwrap();
            let dw = whole.dispersion().unwrap();
            prop_assert!((dl.std_dev - dw.std_dev).abs() <= 1e-8 * (1.0 + dw.std_dev));

            let pl = left.finalize(0.95).unwrap();
            let pw = whole.finalize(0.95).unwrap();
            prop_assert!((pl - pw).abs() <= 1e-10 * (1.0 + pw.abs()));
        }

        #[test]
        fn prop_merge_associative(
            a in prop::collection::vec(-50.0_f64..50.0, 0..50),
            b in prop::collection::vec(-50.0_f64..50.0, 0..50),
            c in prop::collection::vec(-50.0_f64..50.0, 0..50),
        ) {
            let (sa, sb, sc) = (from_payoffs(&a), from_payoffs(&b), from_payoffs(&c));

            let mut left = sa.clone();
            left.merge(&sb).unwrap();
            left.merge(&sc).unwrap();

            let mut bc = sb.clone();
            bc.merge(&sc).unwrap();
            let mut right = sa.clone();
            right.merge(&bc).unwrap();

            prop_assert_eq!(left.count(), right.count());
            prop_assert!((left.sum() - right.sum()).abs() < 1e-9);
            prop_assert!((left.sum_sq() - right.sum_sq()).abs() < 1e-6);
        }
    }
}
