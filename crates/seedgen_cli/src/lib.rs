//! Command-line front end for the seedgen engine
//!
//! This crate wires [`seedgen_core`] to a `seedgen` binary:
//!
//! - `seedgen stream`: raw words on stdout for external statistical batteries
//! - `seedgen sample`: bounded booleans, integers or floats, one per line
//! - `seedgen check`: parallel chi-squared uniformity checks
//!
//! Configuration is layered (CLI > environment > TOML file > defaults), see
//! [`config::build_config`].

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

// Re-export the engine for integration
pub use seedgen_core;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
