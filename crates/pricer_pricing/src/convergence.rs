//! Monte Carlo convergence sweeps against the Black-Scholes baseline.
//!
//! A sweep prices one call and one put for every trial count
//! `1..=max_trials`, re-simulating from scratch each time with
//! `n_paths = trial_count` and the time grid held fixed. The resulting
//! series shows the Monte Carlo estimate narrowing towards the closed-form
//! value as the sample grows.
//!
//! Cost grows as `max_trials² · n_steps` normal draws.

use pricer_core::types::{PricingError, PricingResult};
use pricer_models::instruments::{OptionContract, OptionKind};
use pricer_models::models::SimulationParameters;
use tracing::{info, trace};

use crate::mc::OptionPricer;

/// Call and put Monte Carlo prices at one trial count.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergencePoint {
    /// Number of paths used for this trial.
    pub trial_count: usize,
    /// Discounted Monte Carlo call price.
    pub call_price: f64,
    /// Discounted Monte Carlo put price.
    pub put_price: f64,
}

/// Completed convergence sweep.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceReport {
    /// Points in increasing trial-count order.
    pub points: Vec<ConvergencePoint>,
    /// Black-Scholes call price.
    pub bs_call: f64,
    /// Black-Scholes put price.
    pub bs_put: f64,
}

impl ConvergenceReport {
    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the report holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Trial counts, `1..=max_trials`.
    pub fn trial_counts(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.trial_count).collect()
    }

    /// Monte Carlo call prices in trial order.
    pub fn call_prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.call_price).collect()
    }

    /// Monte Carlo put prices in trial order.
    pub fn put_prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.put_price).collect()
    }

    /// Absolute call error at the largest trial count.
    pub fn final_call_error(&self) -> Option<f64> {
        self.points.last().map(|p| (p.call_price - self.bs_call).abs())
    }

    /// Absolute put error at the largest trial count.
    pub fn final_put_error(&self) -> Option<f64> {
        self.points.last().map(|p| (p.put_price - self.bs_put).abs())
    }
}

/// Lazy convergence sweep.
///
/// Yields one [`ConvergencePoint`] per trial count and ends after
/// `max_trials`. Once exhausted it stays exhausted; build a new sweep to run
/// again. An error from a trial is yielded once and ends the sweep.
#[derive(Debug)]
pub struct ConvergenceSweep<'a> {
    pricer: &'a mut OptionPricer,
    params: SimulationParameters,
    call: OptionContract,
    put: OptionContract,
    bs_call: f64,
    bs_put: f64,
    next_trial: usize,
    max_trials: usize,
}

impl ConvergenceSweep<'_> {
    /// Black-Scholes call baseline.
    #[inline]
    pub fn bs_call(&self) -> f64 {
        self.bs_call
    }

    /// Black-Scholes put baseline.
    #[inline]
    pub fn bs_put(&self) -> f64 {
        self.bs_put
    }

    /// Total number of trials the sweep runs.
    #[inline]
    pub fn max_trials(&self) -> usize {
        self.max_trials
    }

    fn run_trial(&mut self, trial_count: usize) -> PricingResult<ConvergencePoint> {
        let params = self.params.with_paths(trial_count)?;
        let call_price = self.pricer.price_mc(&params, &self.call)?.price;
        let put_price = self.pricer.price_mc(&params, &self.put)?.price;

        trace!(trial_count, call_price, put_price, "convergence trial");

        Ok(ConvergencePoint {
            trial_count,
            call_price,
            put_price,
        })
    }
}

impl Iterator for ConvergenceSweep<'_> {
    type Item = PricingResult<ConvergencePoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_trial > self.max_trials {
            return None;
        }
        let trial_count = self.next_trial;
        let result = self.run_trial(trial_count);
        self.next_trial = if result.is_ok() {
            trial_count + 1
        } else {
            self.max_trials + 1
        };
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.max_trials + 1).saturating_sub(self.next_trial);
        (0, Some(remaining))
    }
}

impl OptionPricer {
    /// Starts a lazy convergence sweep.
    ///
    /// All validation and both Black-Scholes baselines happen here, before
    /// any path is drawn.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for invalid parameters or contracts, a `call` that
    ///   is not a call, a `put` that is not a put, or `max_trials == 0`
    /// - `DomainError` if the closed form is undefined (σ = 0)
    pub fn convergence_iter(
        &mut self,
        params: &SimulationParameters,
        call: &OptionContract,
        put: &OptionContract,
        max_trials: usize,
    ) -> PricingResult<ConvergenceSweep<'_>> {
        params.validate()?;
        call.validate()?;
        put.validate()?;
        if call.kind() != OptionKind::Call {
            return Err(PricingError::invalid("call contract", "must be a call"));
        }
        if put.kind() != OptionKind::Put {
            return Err(PricingError::invalid("put contract", "must be a put"));
        }
        if max_trials == 0 {
            return Err(PricingError::invalid("max_trials", "must be at least 1, got 0"));
        }

        let bs_call = self.price_bs(params, call)?;
        let bs_put = self.price_bs(params, put)?;

        info!(
            max_trials,
            n_steps = params.n_steps(),
            bs_call,
            bs_put,
            "starting convergence sweep"
        );

        Ok(ConvergenceSweep {
            pricer: self,
            params: *params,
            call: *call,
            put: *put,
            bs_call,
            bs_put,
            next_trial: 1,
            max_trials,
        })
    }

    /// Runs a full convergence sweep and collects the report.
    ///
    /// # Errors
    ///
    /// The errors of [`convergence_iter`](Self::convergence_iter); the first
    /// failing trial aborts the sweep.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_models::instruments::OptionContract;
    /// use pricer_models::models::SimulationParameters;
    /// use pricer_pricing::mc::OptionPricer;
    ///
    /// let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 4, 1).unwrap();
    /// let call = OptionContract::call(100.0, 0.05).unwrap();
    /// let put = OptionContract::put(100.0, 0.05).unwrap();
    ///
    /// let report = OptionPricer::from_seed(7)
    ///     .convergence(&params, &call, &put, 20)
    ///     .unwrap();
    /// assert_eq!(report.trial_counts(), (1..=20).collect::<Vec<_>>());
    /// ```
    pub fn convergence(
        &mut self,
        params: &SimulationParameters,
        call: &OptionContract,
        put: &OptionContract,
        max_trials: usize,
    ) -> PricingResult<ConvergenceReport> {
        let sweep = self.convergence_iter(params, call, put, max_trials)?;
        let (bs_call, bs_put) = (sweep.bs_call(), sweep.bs_put());
        let points = sweep.collect::<PricingResult<Vec<_>>>()?;

        let report = ConvergenceReport {
            points,
            bs_call,
            bs_put,
        };

        info!(
            points = report.len(),
            final_call_error = report.final_call_error(),
            final_put_error = report.final_put_error(),
            "convergence sweep finished"
        );

        Ok(report)
    }
}
