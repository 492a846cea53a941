//! Monte Carlo price estimates.

use pricer_core::types::error::ensure_at_least_one;
use pricer_core::types::{PricingError, PricingResult};

/// Discounted Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PriceEstimate;
///
/// let estimate = PriceEstimate::from_payoffs(&[0.0, 10.0, 20.0], 1.0).unwrap();
/// assert_eq!(estimate.price, 10.0);
/// assert_eq!(estimate.n_paths, 3);
/// println!("Price: {} +/- {}", estimate.price, estimate.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceEstimate {
    /// Present value: discount factor × mean payoff.
    pub price: f64,
    /// Number of simulated paths behind the estimate.
    pub n_paths: usize,
    /// Standard error of the price estimate; zero for a single path.
    pub std_error: f64,
}

impl PriceEstimate {
    /// Aggregates undiscounted payoffs into a discounted estimate.
    ///
    /// Uses the sample standard deviation (N − 1 denominator) for the
    /// standard error. A single payoff has no dispersion estimate and
    /// reports a standard error of zero.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `payoffs` is empty, `DomainError` if the price or
    /// its standard error is not finite.
    pub fn from_payoffs(payoffs: &[f64], discount_factor: f64) -> PricingResult<Self> {
        let n_paths = payoffs.len();
        ensure_at_least_one("payoff count", n_paths)?;

        let mean = payoffs.iter().sum::<f64>() / n_paths as f64;
        let std_error = if n_paths > 1 {
            let variance = payoffs.iter().map(|&p| (p - mean).powi(2)).sum::<f64>()
                / (n_paths - 1) as f64;
            variance.sqrt() / (n_paths as f64).sqrt()
        } else {
            0.0
        };

        let estimate = Self {
            price: mean * discount_factor,
            n_paths,
            std_error: std_error * discount_factor,
        };
        if !(estimate.price.is_finite() && estimate.std_error.is_finite()) {
            return Err(PricingError::DomainError(format!(
                "Monte Carlo estimate is not finite (price {}, std error {})",
                estimate.price, estimate.std_error
            )));
        }
        Ok(estimate)
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }

    /// Returns `true` if `reference` lies within `k` standard errors.
    #[inline]
    pub fn is_within(&self, reference: f64, k: f64) -> bool {
        (self.price - reference).abs() <= k * self.std_error
    }
}
