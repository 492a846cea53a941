//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod converge;
pub mod price;
pub mod simulate;
