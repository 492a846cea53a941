//! Geometric Brownian Motion (GBM) path simulation.
//!
//! GBM is the fundamental model for asset price dynamics:
//! ```text
//! dS = μ S dt + σ S dW
//! ```
//!
//! ## Exact log-space update
//!
//! The transition density is known, so each step uses the exact solution
//! rather than an Euler discretisation:
//! ```text
//! S(t+dt) = S(t) · exp((μ − ½σ²)·dt + σ·√dt·Z),   Z ~ N(0, 1)
//! ```
//! The log-return variant accumulates the exponent directly. Both variants
//! consume normals in the same order (time step outer, path inner), so for
//! one seed `ln(S_t / S0)` of the price ensemble equals the log-return
//! ensemble up to rounding.

use pricer_core::rng::PricerRng;
use pricer_core::types::{PricingError, PricingResult};
use rand_distr::Normal;
use tracing::debug;

use super::ensemble::{PathEnsemble, PathKind};
use super::params::SimulationParameters;

/// GBM path simulator with an injected random source.
///
/// The simulator owns its [`PricerRng`]; successive calls continue the same
/// stream, so two simulators built from one seed produce identical sequences
/// of ensembles.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::{PathSimulator, SimulationParameters};
///
/// let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 12, 1_000).unwrap();
/// let mut simulator = PathSimulator::from_seed(42);
///
/// let ensemble = simulator.generate(&params).unwrap();
/// assert_eq!(ensemble.shape(), (13, 1_000));
/// assert!(ensemble.initial_values().iter().all(|&s| s == 100.0));
/// ```
#[derive(Clone, Debug)]
pub struct PathSimulator {
    rng: PricerRng,
}

impl PathSimulator {
    /// Creates a simulator around an existing random source.
    #[inline]
    pub fn new(rng: PricerRng) -> Self {
        Self { rng }
    }

    /// Creates a simulator seeded for reproducible output.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(PricerRng::from_seed(seed))
    }

    /// Creates a simulator using the parameter seed, or entropy when absent.
    pub fn for_params(params: &SimulationParameters) -> Self {
        match params.seed() {
            Some(seed) => Self::from_seed(seed),
            None => Self::new(PricerRng::from_entropy()),
        }
    }

    /// Seed of the underlying random source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Mutable access to the random source.
    #[inline]
    pub fn rng_mut(&mut self) -> &mut PricerRng {
        &mut self.rng
    }

    /// Generates price paths.
    ///
    /// # Algorithm
    ///
    /// 1. Precompute `drift_dt = (μ − ½σ²)dt` and `vol_sqrt_dt = σ√dt`
    /// 2. Row 0 = S0 for all N paths
    /// 3. For t = 1..=M draw N standard normals and set
    ///    `S[t] = S[t−1] · exp(drift_dt + vol_sqrt_dt · z)`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the parameters fail validation; no random numbers
    /// are consumed in that case. `DomainError` if a simulated price
    /// overflows.
    pub fn generate(&mut self, params: &SimulationParameters) -> PricingResult<PathEnsemble> {
        params.validate()?;

        let n_steps = params.n_steps();
        let n_paths = params.n_paths();
        let drift_dt = params.log_drift_per_step();
        let vol_sqrt_dt = params.log_vol_per_step();

        let mut values = vec![0.0; (n_steps + 1) * n_paths];
        values[..n_paths].fill(params.spot());

        for t in 1..=n_steps {
            let (done, rest) = values.split_at_mut(t * n_paths);
            let prev = &done[(t - 1) * n_paths..];
            let next = &mut rest[..n_paths];
            for (s_next, &s_prev) in next.iter_mut().zip(prev) {
                let z = self.rng.gen_normal();
                *s_next = s_prev * (drift_dt + vol_sqrt_dt * z).exp();
            }
        }

        ensure_finite_values(&values, "price paths")?;

        debug!(
            n_steps,
            n_paths,
            dt = params.dt(),
            seed = self.rng.seed(),
            "generated GBM price ensemble"
        );

        Ok(PathEnsemble::from_grid(
            PathKind::Price,
            n_steps,
            n_paths,
            params.dt(),
            values,
        ))
    }

    /// Generates cumulative log-return paths.
    ///
    /// Increments are drawn from N((μ − ½σ²)dt, σ²dt) and summed along the
    /// time axis starting from 0.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the parameters fail validation.
    pub fn generate_log_returns(
        &mut self,
        params: &SimulationParameters,
    ) -> PricingResult<PathEnsemble> {
        params.validate()?;

        let n_steps = params.n_steps();
        let n_paths = params.n_paths();
        let increment = Normal::new(params.log_drift_per_step(), params.log_vol_per_step())
            .map_err(|e| PricingError::InvalidArgument(format!("log-return increment: {}", e)))?;

        let mut values = vec![0.0; (n_steps + 1) * n_paths];

        for t in 1..=n_steps {
            let (done, rest) = values.split_at_mut(t * n_paths);
            let prev = &done[(t - 1) * n_paths..];
            let next = &mut rest[..n_paths];
            for (x_next, &x_prev) in next.iter_mut().zip(prev) {
                *x_next = x_prev + self.rng.sample(&increment);
            }
        }

        ensure_finite_values(&values, "log-return paths")?;

        debug!(
            n_steps,
            n_paths,
            dt = params.dt(),
            seed = self.rng.seed(),
            "generated GBM log-return ensemble"
        );

        Ok(PathEnsemble::from_grid(
            PathKind::LogReturn,
            n_steps,
            n_paths,
            params.dt(),
            values,
        ))
    }

    /// Generates only the terminal prices, one per path.
    ///
    /// Consumes exactly the same normals as [`generate`](Self::generate) and
    /// returns its last row, without storing the intermediate time points.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the parameters fail validation, `DomainError` if
    /// a terminal price overflows.
    pub fn generate_terminal(&mut self, params: &SimulationParameters) -> PricingResult<Vec<f64>> {
        params.validate()?;

        let n_paths = params.n_paths();
        let drift_dt = params.log_drift_per_step();
        let vol_sqrt_dt = params.log_vol_per_step();

        let mut prices = vec![params.spot(); n_paths];
        for _ in 0..params.n_steps() {
            for s in prices.iter_mut() {
                let z = self.rng.gen_normal();
                *s *= (drift_dt + vol_sqrt_dt * z).exp();
            }
        }

        ensure_finite_values(&prices, "terminal prices")?;
        Ok(prices)
    }
}

/// Rejects grids that overflowed to infinity or NaN.
fn ensure_finite_values(values: &[f64], what: &str) -> PricingResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(PricingError::DomainError(format!(
            "{} are not finite; drift, volatility or maturity too large",
            what
        )))
    }
}
