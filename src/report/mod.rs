//! Presentation of collected timings.
//!
//! The text view is always printed. The markup table, the chart and the raw
//! dump are opt-in, and each is independent of the others.

#[cfg(feature = "chart")]
mod chart;
mod table;
mod text;

#[cfg(feature = "chart")]
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::benchmark::{BenchmarkResults, RuntimeInfo};
use crate::config::CHART_FILE_PREFIX;
#[cfg(feature = "chart")]
use crate::error::BenchError;

#[cfg(feature = "chart")]
pub use chart::render_chart;
pub use table::MarkupTable;
pub use text::render_text;

/// Which optional views to produce
#[derive(Debug, Clone, Copy, Default)]
pub struct Views {
    pub rest_tables: bool,
    pub plots: bool,
    pub verbose: bool,
}

/// Print the selected views to stdout and write the chart if requested.
///
/// Returns the chart path when one was written.
pub fn present(
    results: &BenchmarkResults,
    runtime: &RuntimeInfo,
    views: Views,
    output_dir: &Path,
) -> Option<PathBuf> {
    println!();
    print!("{}", render_text(results));

    if views.rest_tables {
        print!("{}", MarkupTable::from_results(&runtime.label, results).render());
        println!();
    }

    let chart = if views.plots {
        save_chart(results, runtime, output_dir)
    } else {
        None
    };

    if views.verbose {
        println!("{:#?}", results);
    }

    chart
}

/// Path the chart for `runtime` is written to
pub fn chart_path(runtime: &RuntimeInfo, output_dir: &Path) -> PathBuf {
    output_dir.join(format!("{}{}.svg", CHART_FILE_PREFIX, runtime.label))
}

/// Best effort: failures are logged, never propagated
#[cfg(feature = "chart")]
pub fn save_chart(results: &BenchmarkResults, runtime: &RuntimeInfo, output_dir: &Path) -> Option<PathBuf> {
    let path = chart_path(runtime, output_dir);
    let rendered = fs::create_dir_all(output_dir)
        .map_err(|source| BenchError::Report {
            path: output_dir.to_path_buf(),
            source,
        })
        .and_then(|()| render_chart(results, &runtime.label, &path));
    match rendered {
        Ok(()) => {
            tracing::info!("Saved chart to {}", path.display());
            Some(path)
        }
        Err(err) => {
            match std::error::Error::source(&err) {
                Some(cause) => warn!("Skipping chart: {}: {}", err, cause),
                None => warn!("Skipping chart: {}", err),
            }
            None
        }
    }
}

#[cfg(not(feature = "chart"))]
pub fn save_chart(_results: &BenchmarkResults, _runtime: &RuntimeInfo, _output_dir: &Path) -> Option<PathBuf> {
    warn!("Unable to load plotters");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_named_for_runtime() {
        let runtime = RuntimeInfo::from_version_line("rustc 1.82.0 (f6e511eec 2024-10-15)");
        assert_eq!(
            chart_path(&runtime, Path::new("out")),
            Path::new("out").join("benchmark-json-Rust 1.82.svg")
        );
    }

    #[test]
    fn chart_failure_does_not_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = RuntimeInfo::from_version_line("rustc 1.82.0");
        // Nothing recorded, so there is nothing to plot
        assert_eq!(save_chart(&BenchmarkResults::new(), &runtime, dir.path()), None);
    }

    #[cfg(feature = "chart")]
    #[test]
    fn chart_creates_missing_output_dir() {
        use crate::benchmark::BenchmarkResult;

        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("charts/nested");
        let runtime = RuntimeInfo::from_version_line("rustc 1.82.0");
        let mut results = BenchmarkResults::new();
        results.record(BenchmarkResult {
            benchmark_name: "loads (large obj)".to_string(),
            library_name: "serde_json".to_string(),
            elapsed_seconds: 0.5,
        });

        let path = save_chart(&results, &runtime, &output_dir).expect("chart written");
        assert_eq!(path, chart_path(&runtime, &output_dir));
        assert!(path.is_file());
    }
}
