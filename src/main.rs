//! JSON library benchmark harness.
//!
//! Run with: `cargo run --release -- [-t] [-p] [-v]`

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jsonbench::config::{self, RunOptions};
use jsonbench::corpus::fixtures::write_fixtures;

const DEFAULT_LOG_FILTER: &str = "jsonbench=info";

#[derive(Debug, Parser)]
#[command(
    name = "jsonbench",
    version,
    about = "Compare decode/encode speed of JSON libraries",
    long_about = None
)]
struct CliArgs {
    /// Print a reStructuredText csv-table of the results
    #[arg(short = 't', long = "tables")]
    rest_tables: bool,

    /// Save a grouped bar chart of the results
    #[arg(short = 'p', long = "plots")]
    plots: bool,

    /// Dump the raw result mapping
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Write a JSON report under the results directory
    #[arg(long)]
    save: bool,

    /// Large document fixture
    #[arg(long, value_name = "PATH", default_value = config::DEFAULT_LARGE_FIXTURE)]
    large: PathBuf,

    /// Newline-delimited small document fixture
    #[arg(long, value_name = "PATH", default_value = config::DEFAULT_SMALL_FIXTURE)]
    small: PathBuf,

    /// Directory the chart is written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Write synthetic fixtures to the fixture paths and exit
    #[arg(long)]
    generate_fixtures: bool,
}

impl CliArgs {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            large_fixture: self.large.clone(),
            small_fixture: self.small.clone(),
            repetitions: config::N_RUNS,
            rest_tables: self.rest_tables,
            plots: self.plots,
            verbose: self.verbose,
            save_report: self.save,
            output_dir: self.output_dir.clone(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    if args.generate_fixtures {
        return write_fixtures(
            &args.large,
            &args.small,
            config::fixtures::LARGE_STATUS_COUNT,
            config::fixtures::SMALL_DOCUMENT_COUNT,
            config::fixtures::SEED,
        )
        .context("failed to generate fixtures");
    }

    jsonbench::run_benchmarks(&args.run_options()).context("benchmark run failed")?;
    Ok(())
}
