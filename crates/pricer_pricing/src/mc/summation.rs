//! Compensated summation for path averages.
//!
//! Long paths summed naively lose low-order bits once the running total
//! dwarfs each term. Neumaier's variant of Kahan summation carries the lost
//! part in a separate compensation term and also handles terms larger than
//! the running sum.

use num_traits::Float;

/// Streaming compensated sum.
///
/// # Example
///
/// ```
/// use pricer_pricing::mc::CompensatedSum;
///
/// let mut acc: CompensatedSum<f64> = CompensatedSum::new();
/// for x in [1.0, 1e100, 1.0, -1e100] {
///     acc.add(x);
/// }
/// assert_eq!(acc.sum(), 2.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CompensatedSum<T: Float> {
    sum: T,
    compensation: T,
    count: usize,
}

impl<T: Float> Default for CompensatedSum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CompensatedSum<T> {
    /// Empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            compensation: T::zero(),
            count: 0,
        }
    }

    /// Adds one term.
    #[inline]
    pub fn add(&mut self, value: T) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation = self.compensation + ((self.sum - t) + value);
        } else {
            self.compensation = self.compensation + ((value - t) + self.sum);
        }
        self.sum = t;
        self.count += 1;
    }

    /// Compensated total.
    #[inline]
    pub fn sum(&self) -> T {
        self.sum + self.compensation
    }

    /// Number of terms added.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean, `None` when empty.
    #[inline]
    pub fn mean(&self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        T::from(self.count).map(|n| self.sum() / n)
    }
}

/// Compensated arithmetic mean of `values`, `None` for an empty slice.
#[inline]
pub fn compensated_mean<T: Float>(values: &[T]) -> Option<T> {
    let mut acc = CompensatedSum::new();
    for &v in values {
        acc.add(v);
    }
    acc.mean()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_mean_simple() {
        assert_eq!(compensated_mean(&[100.0, 105.0, 110.0, 115.0]), Some(107.5));
        assert_eq!(compensated_mean::<f64>(&[]), None);
    }

    #[test]
    fn test_recovers_cancelled_terms() {
        let mut acc = CompensatedSum::new();
        acc.add(1.0_f64);
        acc.add(1e100);
        acc.add(1.0);
        acc.add(-1e100);
        assert_eq!(acc.sum(), 2.0);
        assert_eq!(acc.count(), 4);
    }

    #[test]
    fn test_long_sum_more_accurate_than_naive() {
        // 0.1 is not representable; 10^6 naive additions drift visibly
        let n = 1_000_000;
        let mut acc = CompensatedSum::new();
        let mut naive = 0.0_f64;
        for _ in 0..n {
            acc.add(0.1_f64);
            naive += 0.1;
        }
        let exact = 100_000.0;
        assert!((acc.sum() - exact).abs() <= (naive - exact).abs());
        assert_relative_eq!(acc.sum(), exact, epsilon = 1e-9);
    }

    #[test]
    fn test_f32() {
        let mean = compensated_mean(&[1.0_f32, 2.0, 3.0]).unwrap();
        assert_relative_eq!(mean, 2.0_f32);
    }

    proptest! {
        #[test]
        fn prop_mean_within_bounds(values in prop::collection::vec(-1e6_f64..1e6, 1..500)) {
            let mean = compensated_mean(&values).unwrap();
            let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(mean >= lo - 1e-6 && mean <= hi + 1e-6);
        }
    }
}
