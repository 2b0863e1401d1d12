use crate::error::{Result, ViolationError};
use crate::load_summary::LoadSummary;
use crate::report::write_report;
use crate::totals::{fold_into, ViolationTotals};
use crate::violation::ViolationRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_INPUTS: [&str; 3] = [
    "resources/violations2018.json",
    "resources/violations2019.json",
    "resources/violations2020.json",
];

pub const DEFAULT_OUTPUT: &str = "resources/output.xml";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            inputs: DEFAULT_INPUTS.iter().map(PathBuf::from).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Folds every input file, in order, into one set of totals without sorting.
pub fn aggregate(inputs: &[PathBuf]) -> Result<(ViolationTotals, LoadSummary)> {
    let mut totals = ViolationTotals::new();
    let mut summary = LoadSummary::new();
    for path in inputs {
        let records = ViolationRecord::load(path)?;
        info!(path = %path.display(), records = records.len(), "loaded violations");
        summary += LoadSummary::for_file(records.len());
        totals = fold_into(&records, totals);
        debug!(types = totals.len(), "folded into running totals");
    }
    Ok((totals, summary))
}

/// Runs the whole report and returns the load counts with the number of
/// distinct violation types. The output file is created before any input is
/// read, so a failed run leaves it empty or truncated.
pub fn run(config: &RunConfig) -> Result<(LoadSummary, usize)> {
    let file = File::create(&config.output).map_err(|source| ViolationError::CreateOutput {
        path: config.output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let (totals, summary) = aggregate(&config.inputs)?;
    let totals = totals.sort_descending();

    write_report(&totals, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| write_error(&config.output, source))?;
    info!(
        output = %config.output.display(),
        types = totals.len(),
        total_fines = totals.grand_total(),
        "wrote violations report"
    );
    Ok((summary, totals.len()))
}

fn write_error(path: &Path, source: std::io::Error) -> ViolationError {
    ViolationError::WriteOutput {
        path: path.to_path_buf(),
        source,
    }
}
