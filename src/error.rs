//! Error types for loading violation files and writing the report.

use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input.
    Parse,
    /// The output sink could not be opened or written.
    Io,
}

#[derive(Debug, Error)]
pub enum ViolationError {
    #[error("cannot read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("fine amount {fine_amount} for {violation_type} in {path} is not a finite number")]
    InvalidAmount {
        path: PathBuf,
        violation_type: String,
        fine_amount: f64,
    },

    #[error("unsupported input format for {path} (expected .json or .csv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("cannot create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ViolationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ViolationError::ReadInput { .. }
            | ViolationError::Json { .. }
            | ViolationError::Csv { .. }
            | ViolationError::InvalidAmount { .. }
            | ViolationError::UnsupportedFormat { .. } => ErrorKind::Parse,
            ViolationError::CreateOutput { .. } | ViolationError::WriteOutput { .. } => {
                ErrorKind::Io
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ViolationError>;
