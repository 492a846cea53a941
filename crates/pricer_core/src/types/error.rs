//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from simulation and pricing operations
//! - `PricingResult`: Result alias used across the pricer crates

use thiserror::Error;

/// Categorised pricing errors.
///
/// All validation happens at the call boundary: an operation either fails
/// with one of these variants before doing any work, or runs to completion.
///
/// # Variants
/// - `InvalidArgument`: Bad parameter or unrecognised option kind
/// - `DomainError`: Inputs outside the domain of a closed-form formula
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidArgument("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: Negative spot price");
///
/// let err = PricingError::DomainError("volatility is zero".to_string());
/// assert_eq!(format!("{}", err), "Domain error: volatility is zero");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid parameter value or option kind.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Formula evaluated outside its mathematical domain.
    #[error("Domain error: {0}")]
    DomainError(String),
}

impl PricingError {
    /// Builds an `InvalidArgument` error naming the offending parameter.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingError;
    ///
    /// let err = PricingError::invalid("spot", "must be positive, got -1");
    /// assert_eq!(err.to_string(), "Invalid argument: spot must be positive, got -1");
    /// ```
    pub fn invalid(name: &str, reason: impl std::fmt::Display) -> Self {
        PricingError::InvalidArgument(format!("{} {}", name, reason))
    }

    /// Returns `true` for `InvalidArgument`.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PricingError::InvalidArgument(_))
    }

    /// Returns `true` for `DomainError`.
    #[inline]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, PricingError::DomainError(_))
    }
}

/// Result alias for pricer operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Checks that `value` is finite and strictly positive.
///
/// # Errors
/// Returns `InvalidArgument` naming `name` otherwise.
///
/// # Examples
/// ```
/// use pricer_core::types::error::ensure_positive;
///
/// assert!(ensure_positive("strike", 100.0).is_ok());
/// assert!(ensure_positive("strike", 0.0).is_err());
/// assert!(ensure_positive("strike", f64::NAN).is_err());
/// ```
pub fn ensure_positive(name: &str, value: f64) -> PricingResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format_args!("must be positive and finite, got {}", value),
        ))
    }
}

/// Checks that `value` is finite and non-negative.
///
/// # Errors
/// Returns `InvalidArgument` naming `name` otherwise.
pub fn ensure_non_negative(name: &str, value: f64) -> PricingResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format_args!("must be non-negative and finite, got {}", value),
        ))
    }
}

/// Checks that `value` is finite.
///
/// # Errors
/// Returns `InvalidArgument` naming `name` otherwise.
pub fn ensure_finite(name: &str, value: f64) -> PricingResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format_args!("must be finite, got {}", value),
        ))
    }
}

/// Checks that a count is at least one.
///
/// # Errors
/// Returns `InvalidArgument` naming `name` when `value` is zero.
pub fn ensure_at_least_one(name: &str, value: usize) -> PricingResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(PricingError::invalid(name, "must be at least 1, got 0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = PricingError::InvalidArgument("option kind 'straddle'".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid argument: option kind 'straddle'"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_domain_error());
    }

    #[test]
    fn test_domain_error_display() {
        let err = PricingError::DomainError("σ√T is zero".to_string());
        assert_eq!(format!("{}", err), "Domain error: σ√T is zero");
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::DomainError("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("spot", 1e-12).is_ok());
        assert!(ensure_positive("spot", 0.0).is_err());
        assert!(ensure_positive("spot", -5.0).is_err());
        assert!(ensure_positive("spot", f64::INFINITY).is_err());

        let err = ensure_positive("spot", -5.0).unwrap_err();
        assert!(err.to_string().contains("spot"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("volatility", 0.0).is_ok());
        assert!(ensure_non_negative("volatility", 0.3).is_ok());
        assert!(ensure_non_negative("volatility", -0.1).is_err());
        assert!(ensure_non_negative("volatility", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("drift", -0.5).is_ok());
        assert!(ensure_finite("drift", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_ensure_at_least_one() {
        assert!(ensure_at_least_one("n_paths", 1).is_ok());
        let err = ensure_at_least_one("n_paths", 0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: n_paths must be at least 1, got 0");
    }
}
