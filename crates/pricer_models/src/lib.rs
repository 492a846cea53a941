//! # Pricer Models (L2: Business Logic)
//!
//! Option contracts, GBM path simulation and closed-form pricing.
//!
//! This crate provides:
//! - Simulation parameters with validation and defaults (`models::params`)
//! - GBM path simulation, price and log-return variants (`models::gbm`)
//! - Path ensembles with summary statistics for plotting layers (`models::ensemble`)
//! - European call/put contracts (`instruments`)
//! - Black-Scholes closed-form prices (`analytical`)
//!
//! ## Design Principles
//!
//! - **Validated value types**: parameters and contracts cannot be built invalid
//! - **Injected randomness**: simulators own a seeded `PricerRng`
//! - **Builder pattern** for ergonomic API with sensible defaults

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
