//! Result export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{TabularError, TabularResult};
use crate::models::{BatchRecord, ResultRow};

/// Serialize batch records to CSV with the fixed results column set:
/// `original_number, formatted_number, is_valid, is_possible, line_type,
/// carrier, location, timezone, error`.
///
/// Success rows leave `error` empty; failed rows leave the success columns
/// empty.
pub fn write_csv<W: Write>(records: &[BatchRecord], writer: W) -> TabularResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        csv_writer
            .serialize(ResultRow::from(record))
            .map_err(|e| TabularError::Write(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TabularError::Write(e.to_string()))
}

/// Write batch records to a CSV file at `path`.
pub fn write_csv_file(records: &[BatchRecord], path: &Path) -> TabularResult<()> {
    let file = File::create(path).map_err(|e| TabularError::Write(format!(
        "{}: {}",
        path.display(),
        e
    )))?;
    write_csv(records, file)
}
