//! Standard normal distribution functions.
//!
//! Generic over `T: Float` so the same code serves `f64` and `f32`.

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, Abramowitz and Stegun 7.1.26.
///
/// Maximum absolute error 1.5e-7.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = T::from(0.254_829_592).unwrap();
    let a2 = T::from(-0.284_496_736).unwrap();
    let a3 = T::from(1.421_413_741).unwrap();
    let a4 = T::from(-1.453_152_027).unwrap();
    let a5 = T::from(1.061_405_429).unwrap();
    let p = T::from(0.327_591_1).unwrap();

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let tail = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        T::from(2.0).unwrap() - tail
    } else {
        tail
    }
}

/// Standard normal CDF Φ(x) = ½ erfc(−x/√2).
///
/// # Examples
/// ```
/// use pricer_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    T::from(0.5).unwrap() * erfc_approx(-x / sqrt_2)
}

/// Standard normal density φ(x) = exp(−x²/2) / √(2π).
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    T::from(FRAC_1_SQRT_2PI).unwrap() * (-half * x * x).exp()
}
