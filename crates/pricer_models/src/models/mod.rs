//! Stochastic price path models.
//!
//! This module provides:
//! - `SimulationParameters`: validated GBM configuration with trading-day defaults
//! - `PathSimulator`: exact-update GBM simulator with an injected RNG
//! - `PathEnsemble`: the (M+1) × N grid of simulated values
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{PathKind, PathSimulator, SimulationParameters};
//!
//! let params = SimulationParameters::builder()
//!     .spot(100.0)
//!     .drift(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .n_steps(10)
//!     .n_paths(100)
//!     .build()
//!     .unwrap();
//!
//! let mut simulator = PathSimulator::from_seed(42);
//! let log_returns = simulator.generate_log_returns(&params).unwrap();
//! assert_eq!(log_returns.kind(), PathKind::LogReturn);
//! assert_eq!(log_returns.mean_path().len(), 11);
//! ```

pub mod ensemble;
pub mod gbm;
pub mod params;

pub use ensemble::{Histogram, PathEnsemble, PathKind};
pub use gbm::PathSimulator;
pub use params::{
    default_steps, SimulationParameters, SimulationParametersBuilder, TRADING_DAYS_PER_YEAR,
};
