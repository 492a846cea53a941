//! Simulation parameters for GBM path generation.
//!
//! [`SimulationParameters`] is the single validated configuration object the
//! simulator and the pricer consume. Build it with [`SimulationParameters::new`]
//! or the [`SimulationParametersBuilder`], which fills in the trading-day step
//! count when none is given.

use pricer_core::types::error::{
    ensure_at_least_one, ensure_finite, ensure_non_negative, ensure_positive,
};
use pricer_core::types::PricingResult;

/// Trading days per year used for the default step count.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Default step count for a horizon: `max(1, round(252 · T))`.
///
/// # Examples
/// ```
/// use pricer_models::models::default_steps;
///
/// assert_eq!(default_steps(1.0), 252);
/// assert_eq!(default_steps(0.5), 126);
/// assert_eq!(default_steps(0.001), 1);
/// ```
pub fn default_steps(maturity: f64) -> usize {
    let steps = (TRADING_DAYS_PER_YEAR * maturity).round();
    if steps.is_finite() && steps >= 1.0 {
        steps as usize
    } else {
        1
    }
}

/// GBM simulation parameters.
///
/// # Model
///
/// ```text
/// dS = μ S dt + σ S dW
/// ```
///
/// Immutable once built; every instance satisfies S0 > 0, σ ≥ 0, T > 0,
/// M ≥ 1, N ≥ 1 and has finite values, so `dt = T / M` is strictly positive.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::SimulationParameters;
///
/// let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 252, 10_000).unwrap();
/// assert_eq!(params.n_steps(), 252);
/// assert!((params.dt() - 1.0 / 252.0).abs() < 1e-15);
///
/// assert!(SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 0, 10).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParameters {
    spot: f64,
    drift: f64,
    volatility: f64,
    maturity: f64,
    n_steps: usize,
    n_paths: usize,
    seed: Option<u64>,
}

impl SimulationParameters {
    /// Creates validated parameters without a seed.
    ///
    /// # Arguments
    ///
    /// * `spot` - Initial price S0
    /// * `drift` - Drift μ (annualised)
    /// * `volatility` - Volatility σ (annualised)
    /// * `maturity` - Horizon T in years
    /// * `n_steps` - Time steps M
    /// * `n_paths` - Simulated paths N
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming the first offending parameter.
    pub fn new(
        spot: f64,
        drift: f64,
        volatility: f64,
        maturity: f64,
        n_steps: usize,
        n_paths: usize,
    ) -> PricingResult<Self> {
        let params = Self {
            spot,
            drift,
            volatility,
            maturity,
            n_steps,
            n_paths,
            seed: None,
        };
        params.validate()?;
        Ok(params)
    }

    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if:
    /// - `spot` or `maturity` is not positive and finite
    /// - `volatility` is negative or not finite
    /// - `drift` is not finite
    /// - `n_steps` or `n_paths` is 0
    pub fn validate(&self) -> PricingResult<()> {
        ensure_positive("spot", self.spot)?;
        ensure_finite("drift", self.drift)?;
        ensure_non_negative("volatility", self.volatility)?;
        ensure_positive("maturity", self.maturity)?;
        ensure_at_least_one("n_steps", self.n_steps)?;
        ensure_at_least_one("n_paths", self.n_paths)?;
        Ok(())
    }

    /// Returns a copy with a different path count.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `n_paths` is 0.
    pub fn with_paths(&self, n_paths: usize) -> PricingResult<Self> {
        ensure_at_least_one("n_paths", n_paths)?;
        Ok(Self { n_paths, ..*self })
    }

    /// Returns a copy carrying the given seed.
    #[inline]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Initial price (S0).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Drift (μ).
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Horizon (T) in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Number of time steps (M).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of paths (N).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Time step `T / M`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.maturity / self.n_steps as f64
    }

    /// Per-step log drift `(μ − ½σ²)·dt`.
    #[inline]
    pub fn log_drift_per_step(&self) -> f64 {
        (self.drift - 0.5 * self.volatility * self.volatility) * self.dt()
    }

    /// Per-step log diffusion `σ·√dt`.
    #[inline]
    pub fn log_vol_per_step(&self) -> f64 {
        self.volatility * self.dt().sqrt()
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            spot: 100.0,
            drift: 0.05,
            volatility: 0.2,
            maturity: 1.0,
            n_steps: default_steps(1.0),
            n_paths: 1_000,
            seed: None,
        }
    }
}

/// Builder for [`SimulationParameters`].
///
/// Unset fields take the defaults S0 = 100, μ = 0.05, σ = 0.2, T = 1,
/// N = 1000 and M = `default_steps(T)`.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .maturity(2.0)
///     .n_paths(500)
///     .seed(7)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.n_steps(), 504);
/// assert_eq!(params.seed(), Some(7));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationParametersBuilder {
    spot: Option<f64>,
    drift: Option<f64>,
    volatility: Option<f64>,
    maturity: Option<f64>,
    n_steps: Option<usize>,
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl SimulationParametersBuilder {
    /// Sets the initial price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the drift.
    #[inline]
    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = Some(drift);
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the horizon in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the step count; when unset the trading-day default applies.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets an optional step count.
    #[inline]
    pub fn maybe_n_steps(mut self, n_steps: Option<usize>) -> Self {
        self.n_steps = n_steps;
        self
    }

    /// Sets the path count.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any resulting field is out of range.
    pub fn build(self) -> PricingResult<SimulationParameters> {
        let defaults = SimulationParameters::default();
        let maturity = self.maturity.unwrap_or(defaults.maturity);

        let params = SimulationParameters {
            spot: self.spot.unwrap_or(defaults.spot),
            drift: self.drift.unwrap_or(defaults.drift),
            volatility: self.volatility.unwrap_or(defaults.volatility),
            maturity,
            n_steps: self.n_steps.unwrap_or_else(|| default_steps(maturity)),
            n_paths: self.n_paths.unwrap_or(defaults.n_paths),
            seed: self.seed,
        };

        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::PricingError;

    #[test]
    fn test_default_parameters_are_valid() {
        let params = SimulationParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.n_steps(), 252);
        assert_eq!(params.n_paths(), 1_000);
        assert_eq!(params.seed(), None);
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            SimulationParameters::new(0.0, 0.05, 0.2, 1.0, 10, 10),
            SimulationParameters::new(-100.0, 0.05, 0.2, 1.0, 10, 10),
            SimulationParameters::new(100.0, 0.05, -0.2, 1.0, 10, 10),
            SimulationParameters::new(100.0, 0.05, 0.2, 0.0, 10, 10),
            SimulationParameters::new(100.0, 0.05, 0.2, -1.0, 10, 10),
            SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 0, 10),
            SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 10, 0),
            SimulationParameters::new(f64::NAN, 0.05, 0.2, 1.0, 10, 10),
            SimulationParameters::new(100.0, f64::INFINITY, 0.2, 1.0, 10, 10),
        ];
        for result in cases {
            assert!(matches!(result, Err(PricingError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_zero_volatility_is_valid_for_simulation() {
        assert!(SimulationParameters::new(100.0, 0.05, 0.0, 1.0, 10, 10).is_ok());
    }

    #[test]
    fn test_error_names_parameter() {
        let err = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 0, 10).unwrap_err();
        assert!(err.to_string().contains("n_steps"));
    }

    #[test]
    fn test_step_terms() {
        let params = SimulationParameters::new(100.0, 0.1, 0.3, 2.0, 8, 1).unwrap();
        assert_relative_eq!(params.dt(), 0.25);
        assert_relative_eq!(params.log_drift_per_step(), (0.1 - 0.045) * 0.25, epsilon = 1e-15);
        assert_relative_eq!(params.log_vol_per_step(), 0.3 * 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_with_paths() {
        let params = SimulationParameters::default().with_seed(9);
        let resized = params.with_paths(17).unwrap();
        assert_eq!(resized.n_paths(), 17);
        assert_eq!(resized.n_steps(), params.n_steps());
        assert_eq!(resized.seed(), Some(9));
        assert!(params.with_paths(0).is_err());
    }

    #[test]
    fn test_builder_default_steps_follow_maturity() {
        let params = SimulationParameters::builder().maturity(0.25).build().unwrap();
        assert_eq!(params.n_steps(), 63);

        let explicit = SimulationParameters::builder()
            .maturity(0.25)
            .n_steps(5)
            .build()
            .unwrap();
        assert_eq!(explicit.n_steps(), 5);
    }

    #[test]
    fn test_builder_rejects_invalid() {
        let result = SimulationParameters::builder().volatility(-1.0).build();
        assert!(matches!(result, Err(PricingError::InvalidArgument(_))));
    }

    #[test]
    fn test_default_steps_never_zero() {
        assert_eq!(default_steps(0.0001), 1);
        assert_eq!(default_steps(f64::NAN), 1);
        assert_eq!(default_steps(3.0), 756);
    }
}
