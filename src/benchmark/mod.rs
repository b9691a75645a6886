//! Core benchmarking infrastructure.
//!
//! This module contains the benchmark definitions, the runner that times
//! them, and result collection and export.

pub mod definitions;
pub mod results;
pub mod runner;

pub use definitions::*;
pub use results::*;
pub use runner::*;
