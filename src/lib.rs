//! Sums traffic-violation fines per violation type across yearly data files
//! and writes the totals, highest first, as an XML report.

pub mod error;
pub mod load_summary;
pub mod pipeline;
pub mod report;
pub mod totals;
pub mod violation;

pub use error::{ErrorKind, Result, ViolationError};
pub use load_summary::LoadSummary;
pub use pipeline::{aggregate, run, RunConfig};
pub use report::write_report;
pub use totals::{fold_into, ViolationTotals};
pub use violation::ViolationRecord;
