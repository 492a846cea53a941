//! Core error types shared by every pricer layer.
//!
//! This module provides:
//! - `error`: The `PricingError` taxonomy (`InvalidArgument`, `DomainError`)
//!
//! # Re-exports
//!
//! - [`PricingError`] and [`PricingResult`] from `error`

pub mod error;

pub use error::{PricingError, PricingResult};
