//! Monte Carlo option pricing engine.
//!
//! # Overview
//!
//! The [`OptionPricer`] coordinates:
//! 1. Path generation (via [`PathSimulator`])
//! 2. Payoff evaluation on the terminal prices
//! 3. Discounting and aggregation into a [`PriceEstimate`]
//! 4. The Black-Scholes closed form for the same inputs
//!
//! Paths evolve with the drift μ of the [`SimulationParameters`] while the
//! payoff is discounted with the contract rate r. Setting μ = r gives the
//! risk-neutral price that the closed form reproduces.

use pricer_core::rng::PricerRng;
use pricer_core::types::{PricingError, PricingResult};
use pricer_models::analytical::black_scholes_price;
use pricer_models::instruments::{OptionContract, OptionKind};
use pricer_models::models::{PathEnsemble, PathKind, PathSimulator, SimulationParameters};
use tracing::debug;

use super::estimate::PriceEstimate;

/// Monte Carlo and closed-form option pricer.
///
/// Owns the simulator, so every Monte Carlo call draws fresh normals from
/// the same seeded stream.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::OptionContract;
/// use pricer_models::models::SimulationParameters;
/// use pricer_pricing::mc::OptionPricer;
///
/// let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 12, 20_000).unwrap();
/// let call = OptionContract::call(100.0, 0.05).unwrap();
///
/// let mut pricer = OptionPricer::from_seed(42);
/// let mc = pricer.price_mc(&params, &call).unwrap();
/// let bs = pricer.price_bs(&params, &call).unwrap();
///
/// assert!((mc.price - bs).abs() < 0.05 * bs);
/// ```
#[derive(Clone, Debug)]
pub struct OptionPricer {
    simulator: PathSimulator,
}

impl OptionPricer {
    /// Creates a pricer around an existing simulator.
    #[inline]
    pub fn new(simulator: PathSimulator) -> Self {
        Self { simulator }
    }

    /// Creates a pricer with a seeded simulator.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(PathSimulator::from_seed(seed))
    }

    /// Creates a pricer with an injected random source.
    #[inline]
    pub fn with_rng(rng: PricerRng) -> Self {
        Self::new(PathSimulator::new(rng))
    }

    /// Creates a pricer using the parameter seed, or entropy when absent.
    pub fn for_params(params: &SimulationParameters) -> Self {
        Self::new(PathSimulator::for_params(params))
    }

    /// Seed of the underlying random source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.simulator.seed()
    }

    /// Mutable access to the simulator.
    #[inline]
    pub fn simulator_mut(&mut self) -> &mut PathSimulator {
        &mut self.simulator
    }

    /// Prices a European option by Monte Carlo simulation.
    ///
    /// Simulates N GBM paths, evaluates the floored payoff on each terminal
    /// price and returns `exp(−rT) · mean(payoff)` with its standard error.
    /// The terminal row is identical to the last row of
    /// [`PathSimulator::generate`] for the same random stream.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the parameters or the contract are invalid,
    /// `DomainError` if the simulated prices or the estimate overflow.
    pub fn price_mc(
        &mut self,
        params: &SimulationParameters,
        contract: &OptionContract,
    ) -> PricingResult<PriceEstimate> {
        params.validate()?;
        contract.validate()?;

        let terminal = self.simulator.generate_terminal(params)?;
        let estimate = estimate_from_terminal(&terminal, contract, params.maturity())?;

        debug!(
            kind = %contract.kind(),
            strike = contract.strike(),
            n_paths = estimate.n_paths,
            price = estimate.price,
            std_error = estimate.std_error,
            "Monte Carlo estimate"
        );

        Ok(estimate)
    }

    /// Prices a European option by Monte Carlo with the kind given as text.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a kind other than `call`/`put` (checked before
    /// any simulation), or for invalid parameters, strike or rate.
    pub fn price_mc_kind(
        &mut self,
        params: &SimulationParameters,
        strike: f64,
        rate: f64,
        kind: &str,
    ) -> PricingResult<PriceEstimate> {
        let contract = OptionContract::parse(strike, kind, rate)?;
        self.price_mc(params, &contract)
    }

    /// Prices a European option with the Black-Scholes closed form.
    ///
    /// Deterministic; consumes no random numbers.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for invalid inputs, `DomainError` for σ = 0.
    pub fn price_bs(
        &self,
        params: &SimulationParameters,
        contract: &OptionContract,
    ) -> PricingResult<f64> {
        black_scholes_price(params, contract)
    }

    /// Black-Scholes price with the kind given as text.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an unknown kind, plus the errors of
    /// [`price_bs`](Self::price_bs).
    pub fn price_bs_kind(
        &self,
        params: &SimulationParameters,
        strike: f64,
        rate: f64,
        kind: &str,
    ) -> PricingResult<f64> {
        let contract = OptionContract::parse(strike, kind, rate)?;
        self.price_bs(params, &contract)
    }
}

/// Prices a contract on an already simulated price ensemble.
///
/// # Errors
///
/// `InvalidArgument` if the ensemble holds log-returns rather than prices,
/// or if the contract is invalid.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::OptionContract;
/// use pricer_models::models::{PathSimulator, SimulationParameters};
/// use pricer_pricing::mc::price_ensemble;
///
/// let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 12, 5_000).unwrap();
/// let ensemble = PathSimulator::from_seed(1).generate(&params).unwrap();
/// let put = OptionContract::put(100.0, 0.05).unwrap();
///
/// let estimate = price_ensemble(&ensemble, &put, params.maturity()).unwrap();
/// assert_eq!(estimate.n_paths, 5_000);
/// ```
pub fn price_ensemble(
    ensemble: &PathEnsemble,
    contract: &OptionContract,
    maturity: f64,
) -> PricingResult<PriceEstimate> {
    if ensemble.kind() != PathKind::Price {
        return Err(PricingError::InvalidArgument(
            "ensemble must hold prices, not log-returns".to_string(),
        ));
    }
    contract.validate()?;
    estimate_from_terminal(ensemble.terminal_values(), contract, maturity)
}

/// Payoff per terminal price, floored at zero.
///
/// ```rust
/// use pricer_models::instruments::OptionKind;
/// use pricer_pricing::mc::payoffs;
///
/// assert_eq!(payoffs(&[90.0, 110.0], 100.0, OptionKind::Put), vec![10.0, 0.0]);
/// ```
pub fn payoffs(terminal: &[f64], strike: f64, kind: OptionKind) -> Vec<f64> {
    terminal.iter().map(|&s| kind.payoff(s, strike)).collect()
}

fn estimate_from_terminal(
    terminal: &[f64],
    contract: &OptionContract,
    maturity: f64,
) -> PricingResult<PriceEstimate> {
    let payoffs = payoffs(terminal, contract.strike(), contract.kind());
    PriceEstimate::from_payoffs(&payoffs, contract.discount_factor(maturity))
}
