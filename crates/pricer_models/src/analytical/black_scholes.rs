//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate inputs
//!
//! σ = 0 or T = 0 makes σ√T vanish. Both are rejected with
//! `PricingError::DomainError`; no intrinsic-value fallback is applied.

use num_traits::Float;
use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::{PricingError, PricingResult};

use crate::instruments::{OptionContract, OptionKind};
use crate::models::SimulationParameters;

#[inline]
fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f32`, `f64`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0).unwrap();
/// let put_price = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `InvalidArgument` if spot <= 0, volatility < 0 or any input is not finite
    /// - `DomainError` if volatility == 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).unwrap_err().is_invalid_argument());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap_err().is_domain_error());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> PricingResult<Self> {
        let zero = T::zero();

        if !(spot.is_finite() && spot > zero) {
            return Err(PricingError::invalid(
                "spot",
                format_args!("must be positive and finite, got {}", as_f64(spot)),
            ));
        }
        if !rate.is_finite() {
            return Err(PricingError::invalid(
                "rate",
                format_args!("must be finite, got {}", as_f64(rate)),
            ));
        }
        if !(volatility.is_finite() && volatility >= zero) {
            return Err(PricingError::invalid(
                "volatility",
                format_args!("must be non-negative and finite, got {}", as_f64(volatility)),
            ));
        }
        if volatility == zero {
            return Err(PricingError::DomainError(
                "Black-Scholes is undefined for zero volatility (σ√T = 0)".to_string(),
            ));
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    fn check_inputs(strike: T, expiry: T) -> PricingResult<()> {
        let zero = T::zero();
        if !(strike.is_finite() && strike > zero) {
            return Err(PricingError::invalid(
                "strike",
                format_args!("must be positive and finite, got {}", as_f64(strike)),
            ));
        }
        if !(expiry.is_finite() && expiry >= zero) {
            return Err(PricingError::invalid(
                "expiry",
                format_args!("must be non-negative and finite, got {}", as_f64(expiry)),
            ));
        }
        if expiry == zero {
            return Err(PricingError::DomainError(
                "Black-Scholes is undefined at zero time to expiry (σ√T = 0)".to_string(),
            ));
        }
        Ok(())
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// # Errors
    /// `InvalidArgument` for a non-positive strike or negative expiry,
    /// `DomainError` for zero expiry.
    pub fn d1(&self, strike: T, expiry: T) -> PricingResult<T> {
        Self::check_inputs(strike, expiry)?;
        Ok(self.d1_unchecked(strike, expiry))
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    ///
    /// # Errors
    /// Same as [`d1`](Self::d1).
    pub fn d2(&self, strike: T, expiry: T) -> PricingResult<T> {
        Ok(self.d1(strike, expiry)? - self.volatility * expiry.sqrt())
    }

    #[inline]
    fn d1_unchecked(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap_or_else(T::zero);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0).unwrap();
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    pub fn price_call(&self, strike: T, expiry: T) -> PricingResult<T> {
        self.price(OptionKind::Call, strike, expiry)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0).unwrap();
    /// assert!((price - 5.5735).abs() < 1e-3);
    /// ```
    pub fn price_put(&self, strike: T, expiry: T) -> PricingResult<T> {
        self.price(OptionKind::Put, strike, expiry)
    }

    /// Computes the price for either option kind.
    ///
    /// # Errors
    /// `InvalidArgument` for a non-positive strike or negative expiry,
    /// `DomainError` for zero expiry.
    pub fn price(&self, kind: OptionKind, strike: T, expiry: T) -> PricingResult<T> {
        Self::check_inputs(strike, expiry)?;

        let d1 = self.d1_unchecked(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discounted_strike = strike * (-self.rate * expiry).exp();

        let price = match kind {
            OptionKind::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionKind::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        };

        // The CDF approximation can leave deep out-of-the-money prices a hair below zero.
        Ok(price.max(T::zero()))
    }
}

/// Black-Scholes price for a contract over the simulation horizon.
///
/// Uses S0, σ and T from `params` and K, r and the kind from `contract`;
/// the drift μ plays no role in the closed form.
///
/// # Errors
/// `InvalidArgument` for invalid inputs, `DomainError` for σ = 0.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes_price;
/// use pricer_models::instruments::OptionContract;
/// use pricer_models::models::SimulationParameters;
///
/// let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 252, 1).unwrap();
/// let call = OptionContract::call(100.0, 0.05).unwrap();
/// let price = black_scholes_price(&params, &call).unwrap();
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
pub fn black_scholes_price(
    params: &SimulationParameters,
    contract: &OptionContract,
) -> PricingResult<f64> {
    params.validate()?;
    contract.validate()?;
    BlackScholes::new(params.spot(), contract.rate(), params.volatility())?.price(
        contract.kind(),
        contract.strike(),
        params.maturity(),
    )
}
