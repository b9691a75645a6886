//! reStructuredText `csv-table` view for documentation.

use crate::benchmark::BenchmarkResults;

const LABEL_WIDTH: usize = 20;
const VALUE_WIDTH: usize = 10;
const INDENT: &str = "   ";

/// A table of timings: the header row holds library names after an empty
/// row-label cell, each body row starts with a benchmark name.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupTable {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl MarkupTable {
    pub fn from_results(title: &str, results: &BenchmarkResults) -> Self {
        let libraries = results.library_names();

        let mut header = vec![String::new()];
        header.extend(libraries.iter().map(|name| name.to_string()));

        let rows = results
            .benchmarks()
            .map(|(benchmark, timings)| {
                let mut row = vec![format!("*{}*", benchmark)];
                row.extend(libraries.iter().map(|lib| {
                    timings
                        .get(*lib)
                        .map(|secs| format!("{:.3}", secs))
                        .unwrap_or_default()
                }));
                row
            })
            .collect();

        Self {
            title: title.to_string(),
            header,
            rows,
        }
    }

    /// Columns including the row-label column
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Rows including the header row
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn render(&self) -> String {
        let mut widths = vec![LABEL_WIDTH.to_string()];
        widths.extend((1..self.column_count()).map(|_| VALUE_WIDTH.to_string()));

        let mut out = format!(".. csv-table:: {}\n", self.title);
        out.push_str(&format!("{}:header: {}\n", INDENT, self.header.join(", ")));
        out.push_str(&format!("{}:widths: {}\n\n", INDENT, widths.join(", ")));
        for row in &self.rows {
            out.push_str(&format!("{}{}\n", INDENT, row.join(", ")));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{BenchmarkKind, BenchmarkResult};

    fn results(libraries: &[&str]) -> BenchmarkResults {
        let mut results = BenchmarkResults::new();
        for kind in BenchmarkKind::all() {
            results.ensure_benchmark(kind.name());
            for (i, lib) in libraries.iter().enumerate() {
                results.record(BenchmarkResult {
                    benchmark_name: kind.name().to_string(),
                    library_name: lib.to_string(),
                    elapsed_seconds: 0.5 * (i + 1) as f64,
                });
            }
        }
        results
    }

    #[test]
    fn dimensions_track_libraries_and_benchmarks() {
        for libs in [&[][..], &["serde_json"][..], &["serde_json", "simd-json", "sonic-rs"][..]] {
            let table = MarkupTable::from_results("Rust 1.82", &results(libs));
            assert_eq!(table.column_count(), libs.len() + 1);
            assert_eq!(table.row_count(), BenchmarkKind::all().len() + 1);
            assert!(table.rows.iter().all(|row| row.len() == libs.len() + 1));
        }
    }

    #[test]
    fn renders_csv_table_directive() {
        let table = MarkupTable::from_results("Rust 1.82", &results(&["serde_json", "sonic-rs"]));
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], ".. csv-table:: Rust 1.82");
        assert_eq!(lines[1], "   :header: , serde_json, sonic-rs");
        assert_eq!(lines[2], "   :widths: 20, 10, 10");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "   *loads (large obj)*, 0.500, 1.000");
        assert_eq!(lines.len(), 4 + BenchmarkKind::all().len());
    }
}
