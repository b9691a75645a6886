//! Plain text results view.

use std::fmt::Write;

use crate::benchmark::BenchmarkResults;
use crate::config::TEXT_NAME_WIDTH;

/// One section per benchmark: a title, an underline, one line per library
pub fn render_text(results: &BenchmarkResults) -> String {
    let mut out = String::from("Results\n=======\n");
    for (benchmark, timings) in results.benchmarks() {
        let _ = writeln!(out, "{}", benchmark);
        let _ = writeln!(out, "{}", "-".repeat(benchmark.chars().count()));
        for (library, secs) in timings {
            let _ = writeln!(out, "{:width$}{:.3}s", library, secs, width = TEXT_NAME_WIDTH);
        }
        out.push('\n');
    }
    out
}
