//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ(x)
//! - `norm_pdf`: Probability density function φ(x)
//!
//! Both are generic over `T: Float` so the closed-form pricers can run on
//! `f32` or `f64` without duplication. The complementary error function is
//! evaluated in double precision by `statrs`.

use num_traits::Float;
use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function with an explicit reflection.
///
/// Negative arguments use erfc(-x) = 2 - erfc(x), which keeps
/// Φ(x) + Φ(-x) = 1 to rounding and therefore preserves put-call parity in
/// the closed-form prices.
#[inline]
fn erfc_reflected<T: Float>(x: T) -> T {
    let abs_x = x.abs().to_f64().unwrap_or(f64::NAN);
    let upper = erfc(abs_x);
    let value = if x < T::zero() { 2.0 - upper } else { upper };
    T::from(value).unwrap_or_else(T::nan)
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½ · erfc(−x / √2)
///
/// # Accuracy
/// Double precision (relative error near 1e-15) for finite `x`; the result
/// always lies in [0, 1].
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0_f64) - 0.8413447460685429).abs() < 1e-14);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap_or_else(T::one);
    let half = T::from(0.5).unwrap_or_else(T::zero);
    half * erfc_reflected(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// φ(x) = exp(−x²/2) / √(2π)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap_or_else(T::zero);
    let half = T::from(0.5).unwrap_or_else(T::zero);
    frac_1_sqrt_2pi * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_eq!(norm_cdf(0.0_f64), 0.5);
    }

    #[test]
    fn test_norm_cdf_reflection_is_exact() {
        // Φ(x) + Φ(-x) = 1 to rounding, away from the origin
        for x in [0.1, 0.35, 0.5, 1.0, 1.7, 2.0, 3.0, 5.0] {
            let sum = norm_cdf(x) + norm_cdf(-x);
            assert_relative_eq!(sum, 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(0.35_f64), 0.6368306511756191, epsilon = 1e-14);
    }

    #[test]
    fn test_norm_cdf_tail_values() {
        // Φ(-5) and Φ(-8) to full relative precision
        assert_relative_eq!(norm_cdf(-5.0_f64), 2.866515718791939e-7, max_relative = 1e-12);
        assert_relative_eq!(norm_cdf(-8.0_f64), 6.22096057427178e-16, max_relative = 1e-10);
    }

    #[test]
    fn test_norm_cdf_bounds_and_monotonicity() {
        let xs: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for pair in xs.windows(2) {
            let (a, b) = (norm_cdf(pair[0]), norm_cdf(pair[1]));
            assert!((0.0..=1.0).contains(&a), "CDF out of range at {}", pair[0]);
            assert!(b >= a, "CDF not monotonic at x = {}", pair[0]);
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5, 1.0, 2.5] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-4);
        }
    }
}
