//! Monte Carlo pricing of European options.
//!
//! # Architecture
//!
//! ```text
//! OptionPricer
//! ├── PathSimulator   (GBM paths, owns the seeded PricerRng)
//! ├── payoffs()       (floored call/put payoff on terminal prices)
//! ├── PriceEstimate   (discounted mean + standard error)
//! └── price_bs()      (Black-Scholes closed form for comparison)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pricer_models::instruments::OptionContract;
//! use pricer_models::models::SimulationParameters;
//! use pricer_pricing::mc::OptionPricer;
//!
//! let params = SimulationParameters::builder()
//!     .n_steps(12)
//!     .n_paths(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = OptionPricer::for_params(&params);
//! let call = pricer.price_mc(&params, &OptionContract::call(100.0, 0.05).unwrap()).unwrap();
//! let put = pricer.price_mc(&params, &OptionContract::put(100.0, 0.05).unwrap()).unwrap();
//!
//! println!("Call: {:.4} ± {:.4}", call.price, call.confidence_95());
//! println!("Put:  {:.4} ± {:.4}", put.price, put.confidence_95());
//! ```

mod estimate;
mod pricer;

pub use estimate::PriceEstimate;
pub use pricer::{payoffs, price_ensemble, OptionPricer};
