//! European vanilla option contracts.
//!
//! An [`OptionContract`] carries everything the payoff and discounting need:
//! strike, [`OptionKind`] and the continuously compounded risk-free rate.
//! Maturity lives on the simulation parameters, so the same contract can be
//! priced over different horizons.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::error::{ensure_finite, ensure_positive};
use pricer_core::types::{PricingError, PricingResult};

/// Option kind: call or put.
///
/// Parsing is case-insensitive and accepts only `"call"` and `"put"`;
/// anything else is an `InvalidArgument`, never a silent default.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionKind;
///
/// assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
/// assert_eq!("PUT".parse::<OptionKind>().unwrap(), OptionKind::Put);
/// assert!("straddle".parse::<OptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Evaluates the payoff at maturity, floored at zero.
    ///
    /// ```
    /// use pricer_models::instruments::OptionKind;
    ///
    /// assert_eq!(OptionKind::Call.payoff(110.0, 100.0), 10.0);
    /// assert_eq!(OptionKind::Put.payoff(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(&self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (terminal - strike).max(0.0),
            OptionKind::Put => (strike - terminal).max(0.0),
        }
    }

    /// Returns the lowercase name used for parsing and display.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(PricingError::InvalidArgument(format!(
                "option kind '{}': use 'call' or 'put'",
                s
            ))),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// European option contract.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionKind};
///
/// let call = OptionContract::call(100.0, 0.05).unwrap();
/// assert_eq!(call.kind(), OptionKind::Call);
/// assert_eq!(call.payoff(120.0), 20.0);
///
/// assert!(OptionContract::new(-1.0, OptionKind::Put, 0.05).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    strike: f64,
    kind: OptionKind,
    rate: f64,
}

impl OptionContract {
    /// Creates a validated contract.
    ///
    /// # Errors
    /// `InvalidArgument` if the strike is not positive and finite, or the
    /// rate is not finite.
    pub fn new(strike: f64, kind: OptionKind, rate: f64) -> PricingResult<Self> {
        let contract = Self { strike, kind, rate };
        contract.validate()?;
        Ok(contract)
    }

    /// Creates a contract from a textual option kind.
    ///
    /// # Errors
    /// `InvalidArgument` for an unknown kind or invalid strike/rate.
    pub fn parse(strike: f64, kind: &str, rate: f64) -> PricingResult<Self> {
        Self::new(strike, kind.parse()?, rate)
    }

    /// Creates a call contract.
    pub fn call(strike: f64, rate: f64) -> PricingResult<Self> {
        Self::new(strike, OptionKind::Call, rate)
    }

    /// Creates a put contract.
    pub fn put(strike: f64, rate: f64) -> PricingResult<Self> {
        Self::new(strike, OptionKind::Put, rate)
    }

    /// Re-checks the contract invariants.
    ///
    /// Contracts built through the constructors always pass; deserialised
    /// contracts should be validated before use.
    pub fn validate(&self) -> PricingResult<()> {
        ensure_positive("strike", self.strike)?;
        ensure_finite("rate", self.rate)?;
        Ok(())
    }

    /// Strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Continuously compounded risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Payoff at maturity for a terminal price, never negative.
    #[inline]
    pub fn payoff(&self, terminal: f64) -> f64 {
        self.kind.payoff(terminal, self.strike)
    }

    /// Discount factor e^(−rT) for a horizon in years.
    #[inline]
    pub fn discount_factor(&self, maturity: f64) -> f64 {
        (-self.rate * maturity).exp()
    }
}
