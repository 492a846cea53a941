//! # Pricer Engine (Layer 3: Pricing)
//!
//! Monte Carlo pricing of European calls and puts under Geometric Brownian
//! Motion, cross-checked against the Black-Scholes closed form.
//!
//! ## Layer 3 Role
//!
//! - [`mc`]: [`OptionPricer`](mc::OptionPricer) turns simulated terminal
//!   prices into a discounted [`PriceEstimate`](mc::PriceEstimate)
//! - [`convergence`]: sweeps the path count and records how the Monte Carlo
//!   estimate approaches the closed-form value
//!
//! Path generation lives in `pricer_models` (Layer 2) and the error type and
//! random source in `pricer_core` (Layer 1).
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::OptionContract;
//! use pricer_models::models::SimulationParameters;
//! use pricer_pricing::mc::OptionPricer;
//!
//! let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 12, 50_000).unwrap();
//! let call = OptionContract::call(100.0, 0.05).unwrap();
//!
//! let mut pricer = OptionPricer::from_seed(2024);
//! let mc = pricer.price_mc(&params, &call).unwrap();
//! let bs = pricer.price_bs(&params, &call).unwrap();
//!
//! assert!((bs - 10.4506).abs() < 1e-4);
//! assert!((mc.price - bs).abs() < 0.05 * bs);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for estimates and convergence reports

#![warn(missing_docs)]

pub mod convergence;
pub mod mc;

pub use convergence::{ConvergencePoint, ConvergenceReport, ConvergenceSweep};
pub use mc::{OptionPricer, PriceEstimate};
