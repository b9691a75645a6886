//! Benchmark results collection, storage, and export.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::RESULTS_DIR;
use crate::error::{BenchError, Result};

/// Timings for one benchmark, keyed by library name in run order
pub type LibraryTimings = IndexMap<String, f64>;

/// A single (benchmark, library) measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub benchmark_name: String,
    pub library_name: String,
    pub elapsed_seconds: f64,
}

/// All measurements of a run: benchmark name → library name → seconds.
///
/// Both levels keep insertion order, which is the order reports use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkResults {
    timings: IndexMap<String, LibraryTimings>,
}

impl BenchmarkResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a benchmark has a row, even if nothing is recorded in it
    pub fn ensure_benchmark(&mut self, benchmark: &str) {
        if !self.timings.contains_key(benchmark) {
            self.timings.insert(benchmark.to_string(), LibraryTimings::new());
        }
    }

    /// Record one measurement, replacing any earlier value for the same pair
    pub fn record(&mut self, result: BenchmarkResult) {
        self.timings
            .entry(result.benchmark_name)
            .or_default()
            .insert(result.library_name, result.elapsed_seconds);
    }

    pub fn get(&self, benchmark: &str, library: &str) -> Option<f64> {
        self.timings.get(benchmark)?.get(library).copied()
    }

    pub fn benchmarks(&self) -> impl Iterator<Item = (&str, &LibraryTimings)> {
        self.timings.iter().map(|(name, timings)| (name.as_str(), timings))
    }

    pub fn benchmark_names(&self) -> Vec<&str> {
        self.timings.keys().map(String::as_str).collect()
    }

    /// Library names in the order they first appear
    pub fn library_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for timings in self.timings.values() {
            for name in timings.keys() {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Flattened measurements in report order
    pub fn entries(&self) -> Vec<BenchmarkResult> {
        self.timings
            .iter()
            .flat_map(|(benchmark, timings)| {
                timings.iter().map(move |(library, secs)| BenchmarkResult {
                    benchmark_name: benchmark.clone(),
                    library_name: library.clone(),
                    elapsed_seconds: *secs,
                })
            })
            .collect()
    }

    /// Total number of (benchmark, library) entries
    pub fn entry_count(&self) -> usize {
        self.timings.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

/// The toolchain that built the harness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeInfo {
    /// Full compiler version line
    pub version: String,
    /// Short `Rust <major>.<minor>` label for titles and file names
    pub label: String,
}

impl RuntimeInfo {
    pub fn detect() -> Self {
        Self::from_version_line(env!("JSONBENCH_RUSTC_VERSION"))
    }

    /// Parse a `rustc 1.82.0 (f6e511eec 2024-10-15)` style line
    pub fn from_version_line(line: &str) -> Self {
        let short = line
            .split_whitespace()
            .nth(1)
            .map(|semver| semver.split('.').take(2).collect::<Vec<_>>().join("."))
            .filter(|short| !short.is_empty());

        let label = match short {
            Some(short) => format!("Rust {}", short),
            None => "Rust".to_string(),
        };

        Self {
            version: line.to_string(),
            label,
        }
    }
}

/// System information for context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu_cores: usize,
    pub runtime: RuntimeInfo,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_cores: std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
            runtime: RuntimeInfo::detect(),
        }
    }
}

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub timestamp: String,
    pub repetitions: usize,
    pub system_info: SystemInfo,
    pub results: BenchmarkResults,
}

impl BenchmarkReport {
    pub fn new(repetitions: usize, results: BenchmarkResults) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            repetitions,
            system_info: SystemInfo::default(),
            results,
        }
    }

    /// Save report to a timestamped JSON file under the results directory
    pub fn save(&self) -> Result<PathBuf> {
        self.save_in(Path::new(RESULTS_DIR))
    }

    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| BenchError::Report {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let filename = dir.join(format!(
            "benchmark_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ));

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&filename, json).map_err(|source| BenchError::Report {
            path: filename.clone(),
            source,
        })?;

        info!("Saved report to {}", filename.display());
        Ok(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(benchmark: &str, library: &str, secs: f64) -> BenchmarkResult {
        BenchmarkResult {
            benchmark_name: benchmark.to_string(),
            library_name: library.to_string(),
            elapsed_seconds: secs,
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let mut results = BenchmarkResults::new();
        results.record(result("b", "zeta", 1.0));
        results.record(result("a", "alpha", 2.0));
        results.record(result("b", "alpha", 3.0));

        assert_eq!(results.benchmark_names(), vec!["b", "a"]);
        assert_eq!(results.library_names(), vec!["zeta", "alpha"]);
        assert_eq!(results.get("b", "alpha"), Some(3.0));
        assert_eq!(results.entry_count(), 3);
    }

    #[test]
    fn re_recording_replaces() {
        let mut results = BenchmarkResults::new();
        results.record(result("a", "x", 1.0));
        results.record(result("a", "x", 4.0));
        assert_eq!(results.entry_count(), 1);
        assert_eq!(results.get("a", "x"), Some(4.0));
    }

    #[test]
    fn empty_rows_count_as_empty() {
        let mut results = BenchmarkResults::new();
        results.ensure_benchmark("a");
        results.ensure_benchmark("a");
        assert_eq!(results.benchmark_names(), vec!["a"]);
        assert!(results.is_empty());
        assert!(results.library_names().is_empty());
    }

    #[test]
    fn runtime_label_from_version_line() {
        let info = RuntimeInfo::from_version_line("rustc 1.82.0 (f6e511eec 2024-10-15)");
        assert_eq!(info.label, "Rust 1.82");
        assert_eq!(RuntimeInfo::from_version_line("garbage").label, "Rust");
    }

    #[test]
    fn report_saves_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut results = BenchmarkResults::new();
        results.record(result("loads (large obj)", "serde_json", 0.25));

        let path = BenchmarkReport::new(100, results.clone())
            .save_in(&dir.path().join("out"))
            .unwrap();

        let text = fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["repetitions"], 100);
        assert_eq!(value["results"]["loads (large obj)"]["serde_json"], 0.25);
    }
}
