//! # Random Number Generation Infrastructure
//!
//! Seeded random number generation for Monte Carlo path simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator carries the seed it was built from,
//!   so a run can be logged and replayed bit for bit
//! - **Injection**: generators are owned by the simulator that uses them;
//!   there is no process-wide RNG
//! - **Efficiency**: batch operations fill caller-provided `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//!
//! let uniform_value = rng.gen_uniform();
//! let normal_value = rng.gen_normal();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;

#[cfg(test)]
mod tests;
