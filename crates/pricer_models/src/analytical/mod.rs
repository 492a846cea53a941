//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions used as ground truth for the
//! Monte Carlo estimates:
//! - Black-Scholes model for lognormal dynamics
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f32` and `f64`
//! - **Explicit domain**: σ = 0 or T = 0 is a `DomainError`, never NaN

pub mod black_scholes;

pub use black_scholes::{black_scholes_price, BlackScholes};
