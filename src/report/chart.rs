//! Grouped bar chart of the results.
//!
//! One group per benchmark, one bar per library, each bar labelled with its
//! value. Rendered to SVG so no font or image stack is needed at build time.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::benchmark::BenchmarkResults;
use crate::config::chart::{FONT_SIZE_LABEL, FONT_SIZE_TITLE, FONT_SIZE_VALUE, HEIGHT, MARGIN, WIDTH};
use crate::error::{BenchError, Result};

/// Headroom above the tallest bar for its value label
const Y_HEADROOM: f64 = 1.15;

fn chart_err<E: std::fmt::Display>(err: E) -> BenchError {
    BenchError::Chart(err.to_string())
}

pub fn render_chart(results: &BenchmarkResults, title: &str, path: &Path) -> Result<()> {
    let benchmarks = results.benchmark_names();
    let libraries = results.library_names();
    if libraries.is_empty() {
        return Err(BenchError::Chart("no results to plot".to_string()));
    }

    let bar_width = 1.0 / (libraries.len() as f64 + 1.0);
    let tallest = results
        .entries()
        .iter()
        .map(|entry| entry.elapsed_seconds)
        .fold(0.0, f64::max);
    let y_top = if tallest > 0.0 { tallest * Y_HEADROOM } else { 1.0 };

    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", FONT_SIZE_TITLE))
        .margin(MARGIN)
        .x_label_area_size(48u32)
        .y_label_area_size(64u32)
        .build_cartesian_2d(0f64..benchmarks.len() as f64, 0f64..y_top)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_| String::new())
        .y_desc("Time (s)")
        .label_style(("sans-serif", FONT_SIZE_LABEL))
        .draw()
        .map_err(chart_err)?;

    let value_style = TextStyle::from(("sans-serif", FONT_SIZE_VALUE).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (lib_idx, library) in libraries.iter().enumerate() {
        let color = Palette99::pick(lib_idx).to_rgba();
        let offset = bar_width * (lib_idx as f64 + 1.0);
        let bars: Vec<(f64, f64)> = benchmarks
            .iter()
            .enumerate()
            .filter_map(|(bench_idx, bench)| {
                results
                    .get(bench, library)
                    .map(|secs| (bench_idx as f64 + offset, secs))
            })
            .collect();

        chart
            .draw_series(bars.iter().map(|&(x, secs)| {
                Rectangle::new(
                    [(x - bar_width / 2.0, 0.0), (x + bar_width / 2.0, secs)],
                    color.filled(),
                )
            }))
            .map_err(chart_err)?
            .label(*library)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));

        chart
            .draw_series(
                bars.iter()
                    .map(|&(x, secs)| Text::new(format!("{:.2}", secs), (x, secs), value_style.clone())),
            )
            .map_err(chart_err)?;
    }

    let label_style = TextStyle::from(("sans-serif", FONT_SIZE_LABEL).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (bench_idx, bench) in benchmarks.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(bench_idx as f64 + 0.5, 0.0));
        root.draw(&Text::new(bench.to_string(), (px, py + 8), label_style.clone()))
            .map_err(chart_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::BenchmarkResult;

    #[test]
    fn writes_svg_with_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let mut results = BenchmarkResults::new();
        for (bench, lib, secs) in [
            ("loads (large obj)", "serde_json", 1.5),
            ("loads (large obj)", "sonic-rs", 0.75),
            ("dumps (large obj)", "serde_json", 0.5),
            ("dumps (large obj)", "sonic-rs", 0.25),
        ] {
            results.record(BenchmarkResult {
                benchmark_name: bench.to_string(),
                library_name: lib.to_string(),
                elapsed_seconds: secs,
            });
        }

        render_chart(&results, "Rust 1.82", &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Rust 1.82"));
        assert!(svg.contains("1.50"));
        assert!(svg.contains("sonic-rs"));
    }

    #[test]
    fn empty_results_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut results = BenchmarkResults::new();
        results.ensure_benchmark("loads (large obj)");
        assert!(matches!(
            render_chart(&results, "Rust", &dir.path().join("x.svg")),
            Err(BenchError::Chart(_))
        ));
    }
}
