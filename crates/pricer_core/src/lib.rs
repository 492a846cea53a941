//! # pricer_core: Foundation for the GBM Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the pricer workspace, providing:
//! - Error taxonomy: `PricingError` (`types::error`)
//! - Standard normal CDF and PDF (`math::distributions`)
//! - Seeded random number generation: `PricerRng` (`rng`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - rand / rand_distr: Seedable PRNG and normal sampling
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::rng::PricerRng;
//! use pricer_core::types::PricingError;
//!
//! let mut rng = PricerRng::from_seed(42);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//!
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
//!
//! let err = PricingError::InvalidArgument("spot must be positive".to_string());
//! assert_eq!(err.to_string(), "Invalid argument: spot must be positive");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod rng;
pub mod types;
