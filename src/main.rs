use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::error;
use violation_report::pipeline::{DEFAULT_INPUTS, DEFAULT_OUTPUT};
use violation_report::{run, RunConfig, ViolationError};

/// Total fines per violation type across yearly violation files.
#[derive(Debug, Parser)]
#[command(name = "violation-report", version)]
struct Args {
    /// Input files (.json or .csv), folded in the given order.
    #[arg(default_values = DEFAULT_INPUTS)]
    inputs: Vec<PathBuf>,

    /// Where to write the XML report.
    #[arg(short, long, env = "VIOLATION_REPORT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            inputs: args.inputs,
            output: args.output,
        }
    }
}

fn main() -> Result<(), ViolationError> {
    // RUST_LOG=debug for per-file detail
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from(Args::parse());
    let start = Instant::now();
    let (summary, num_types) =
        run(&config).inspect_err(|e| error!(kind = ?e.kind(), "{e}"))?;

    let duration = start.elapsed();
    println!("Total Files: {}", summary.num_files);
    println!("Total Records: {}", summary.num_records);
    println!("Violation Types: {num_types}");
    println!("Report: {}", config.output.display());
    println!("Duration: {duration:?}");
    Ok(())
}
