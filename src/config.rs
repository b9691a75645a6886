//! Configuration constants for the benchmark harness.
//!
//! Modify these values to adjust benchmark behavior.

use std::path::PathBuf;

/// Number of times each benchmark operation runs before the total is recorded
pub const N_RUNS: usize = 100;

/// Candidate libraries, in the order they are resolved and reported
pub const CANDIDATE_LIBRARIES: &[&str] = &["serde_json", "simd-json", "sonic-rs"];

/// Default path of the large document fixture
pub const DEFAULT_LARGE_FIXTURE: &str = "data/twitter.json";

/// Default path of the newline-delimited small document fixture
pub const DEFAULT_SMALL_FIXTURE: &str = "data/one-json-per-line.txt";

/// Results output directory for saved JSON reports
pub const RESULTS_DIR: &str = "benchmark_results";

/// Prefix for chart image file names
pub const CHART_FILE_PREFIX: &str = "benchmark-json-";

/// Width of the library name column in the text view
pub const TEXT_NAME_WIDTH: usize = 16;

/// Synthetic fixture sizing
pub mod fixtures {
    /// Statuses in the generated large document
    pub const LARGE_STATUS_COUNT: usize = 200;

    /// Lines in the generated small document file
    pub const SMALL_DOCUMENT_COUNT: usize = 500;

    /// Seed for reproducible fixtures
    pub const SEED: u64 = 42;
}

/// Chart sizing
pub mod chart {
    pub const WIDTH: u32 = 1200;
    pub const HEIGHT: u32 = 720;
    pub const MARGIN: u32 = 24;
    pub const FONT_SIZE_TITLE: u32 = 28;
    pub const FONT_SIZE_LABEL: u32 = 14;
    pub const FONT_SIZE_VALUE: u32 = 11;
}

/// Choices made on the command line for a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub large_fixture: PathBuf,
    pub small_fixture: PathBuf,
    pub repetitions: usize,
    pub rest_tables: bool,
    pub plots: bool,
    pub verbose: bool,
    pub save_report: bool,
    pub output_dir: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            large_fixture: PathBuf::from(DEFAULT_LARGE_FIXTURE),
            small_fixture: PathBuf::from(DEFAULT_SMALL_FIXTURE),
            repetitions: N_RUNS,
            rest_tables: false,
            plots: false,
            verbose: false,
            save_report: false,
            output_dir: PathBuf::from("."),
        }
    }
}
