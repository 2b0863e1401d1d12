use crate::error::{Result, ViolationError};
use serde::Deserialize;
use std::fs::{self, File};
use std::path::Path;

/// One fine entry from a yearly violations file. Fields other than the
/// violation type and the fine amount are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViolationRecord {
    #[serde(rename = "type")]
    pub violation_type: String,
    pub fine_amount: f64,
}

enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    fn detect(path: &Path) -> Result<InputFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("csv") => Ok(InputFormat::Csv),
            _ => Err(ViolationError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl ViolationRecord {
    pub fn new(violation_type: impl Into<String>, fine_amount: f64) -> ViolationRecord {
        ViolationRecord {
            violation_type: violation_type.into(),
            fine_amount,
        }
    }

    /// Loads every record from `path`, choosing the format by extension.
    /// The first malformed element fails the whole file.
    pub fn load(path: &Path) -> Result<Vec<ViolationRecord>> {
        let records = match InputFormat::detect(path)? {
            InputFormat::Json => ViolationRecord::load_json(path)?,
            InputFormat::Csv => ViolationRecord::load_csv(path)?,
        };
        ensure_finite(path, &records)?;
        Ok(records)
    }

    /// Expects a top-level array of objects.
    pub fn load_json(path: &Path) -> Result<Vec<ViolationRecord>> {
        let contents = fs::read_to_string(path).map_err(|source| ViolationError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ViolationError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Expects a header row naming at least `type` and `fine_amount`.
    pub fn load_csv(path: &Path) -> Result<Vec<ViolationRecord>> {
        let file = File::open(path).map_err(|source| ViolationError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let mut rdr = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let record: ViolationRecord = result.map_err(|source| ViolationError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

// CSV cells parse "NaN" and "inf" as floats; neither is a fine.
fn ensure_finite(path: &Path, records: &[ViolationRecord]) -> Result<()> {
    match records.iter().find(|record| !record.fine_amount.is_finite()) {
        Some(record) => Err(ViolationError::InvalidAmount {
            path: path.to_path_buf(),
            violation_type: record.violation_type.clone(),
            fine_amount: record.fine_amount,
        }),
        None => Ok(()),
    }
}
