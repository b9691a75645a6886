//! Benchmark execution.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::benchmark::definitions::BenchmarkKind;
use crate::benchmark::results::{BenchmarkResult, BenchmarkResults};
use crate::config::N_RUNS;
use crate::corpus::Corpus;
use crate::error::{BenchError, Result};
use crate::libraries::{JsonLibrary, LibraryError, Registry};

/// Times every benchmark definition against every library, one after the
/// other on the calling thread.
pub struct Runner<'a> {
    corpus: &'a Corpus,
    repetitions: usize,
}

impl<'a> Runner<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            repetitions: N_RUNS,
        }
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Run the full matrix. The first library failure aborts the run.
    pub fn run(&self, registry: &Registry) -> Result<BenchmarkResults> {
        let mut results = BenchmarkResults::new();
        for kind in BenchmarkKind::all() {
            results.ensure_benchmark(kind.name());
        }

        for library in registry.iter() {
            info!("Running {} benchmarks...", library.name());
            for kind in BenchmarkKind::all() {
                results.record(self.run_one(*kind, library)?);
            }
        }

        Ok(results)
    }

    /// Time `repetitions` executions of one benchmark for one library
    pub fn run_one(&self, kind: BenchmarkKind, library: &dyn JsonLibrary) -> Result<BenchmarkResult> {
        let elapsed = measure(self.repetitions, || kind.execute(library, self.corpus)).map_err(|err| {
            BenchError::Library {
                library: library.name().to_string(),
                benchmark: kind.name().to_string(),
                message: err.to_string(),
            }
        })?;

        debug!(
            "{} / {}: {:.6}s over {} repetitions",
            kind.name(),
            library.name(),
            elapsed.as_secs_f64(),
            self.repetitions
        );

        Ok(BenchmarkResult {
            benchmark_name: kind.name().to_string(),
            library_name: library.name().to_string(),
            elapsed_seconds: elapsed.as_secs_f64(),
        })
    }
}

/// Total wall-clock time for `repetitions` calls of `op`
pub fn measure<F>(repetitions: usize, mut op: F) -> std::result::Result<Duration, LibraryError>
where
    F: FnMut() -> std::result::Result<(), LibraryError>,
{
    let start = Instant::now();
    for _ in 0..repetitions {
        op()?;
    }
    Ok(start.elapsed())
}
