//! The end-to-end pipeline: load, resolve, run, report.

use tracing::info;

use crate::benchmark::{BenchmarkReport, BenchmarkResults, Runner, RuntimeInfo};
use crate::config::{RunOptions, CANDIDATE_LIBRARIES};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::libraries::Registry;
use crate::report::{self, Views};

/// Run the whole benchmark matrix once and present it.
///
/// Fixture problems fail before any timing starts; a library failure aborts
/// without reporting anything.
pub fn run_benchmarks(options: &RunOptions) -> Result<BenchmarkResults> {
    let runtime = RuntimeInfo::detect();
    let corpus = Corpus::load(&options.large_fixture, &options.small_fixture)?;

    println!("{}", runtime.version);

    let registry = Registry::resolve(CANDIDATE_LIBRARIES.iter().copied());
    info!("Resolved {} of {} candidate libraries", registry.len(), CANDIDATE_LIBRARIES.len());

    let results = Runner::new(&corpus)
        .with_repetitions(options.repetitions)
        .run(&registry)?;

    report::present(
        &results,
        &runtime,
        Views {
            rest_tables: options.rest_tables,
            plots: options.plots,
            verbose: options.verbose,
        },
        &options.output_dir,
    );

    if options.save_report {
        BenchmarkReport::new(options.repetitions, results.clone()).save()?;
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::BenchmarkKind;
    use crate::corpus::fixtures::write_fixtures;
    use crate::error::BenchError;

    #[test]
    fn full_run_over_generated_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let options = RunOptions {
            large_fixture: dir.path().join("twitter.json"),
            small_fixture: dir.path().join("lines.txt"),
            repetitions: 2,
            rest_tables: true,
            output_dir: dir.path().to_path_buf(),
            ..RunOptions::default()
        };
        write_fixtures(&options.large_fixture, &options.small_fixture, 5, 10, 3).unwrap();

        let results = run_benchmarks(&options).unwrap();
        let libraries = Registry::resolve(CANDIDATE_LIBRARIES.iter().copied()).len();
        assert_eq!(results.entry_count(), BenchmarkKind::all().len() * libraries);
    }

    #[test]
    fn missing_fixture_stops_before_timing() {
        let dir = tempfile::tempdir().unwrap();
        let options = RunOptions {
            large_fixture: dir.path().join("absent.json"),
            small_fixture: dir.path().join("absent.txt"),
            ..RunOptions::default()
        };
        assert!(matches!(
            run_benchmarks(&options),
            Err(BenchError::ResourceMissing { .. })
        ));
    }
}
