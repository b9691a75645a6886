//! # jsonbench
//!
//! Measures how fast several JSON libraries decode and encode one large
//! document and many small ones.
//!
//! ## Modules
//!
//! - [`corpus`]: Fixture loading and synthetic fixture generation
//! - [`libraries`]: Candidate libraries and the registry that resolves them
//! - [`benchmark`]: Benchmark definitions, the runner, and results
//! - [`report`]: Text, reStructuredText, and chart views
//! - [`config`]: Configuration constants
//! - [`harness`]: The end-to-end pipeline

pub mod benchmark;
pub mod config;
pub mod corpus;
pub mod error;
pub mod harness;
pub mod libraries;
pub mod report;

pub use error::{BenchError, Result};
pub use harness::run_benchmarks;
