//! Financial instrument definitions.
//!
//! - [`vanilla`]: European call/put contracts and the option kind enum

pub mod vanilla;

pub use vanilla::{OptionContract, OptionKind};
