//! Tabular input sources.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{TabularError, TabularResult};

/// An in-memory table: header names plus rows of string-coerced cells.
///
/// Row order is preserved exactly as read; cells are coerced to their
/// string form at load time so downstream consumers never see the source
/// file's native cell types.
#[derive(Debug, Clone)]
pub struct TabularSource {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TabularSource {
    /// Read a table from a file, choosing the parser by extension
    /// (`.csv`, `.tsv`, or `.xlsx`).
    pub fn open(path: &Path) -> TabularResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Self::from_csv_content(&Self::read_file(path)?, b','),
            "tsv" => Self::from_csv_content(&Self::read_file(path)?, b'\t'),
            "xlsx" => Self::from_xlsx(path),
            other => Err(TabularError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Parse delimited content from a string. The first record is the
    /// header row; remaining records may be shorter or longer than it.
    pub fn from_csv_content(content: &str, delimiter: u8) -> TabularResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| TabularError::Malformed {
                format: "csv",
                reason: format!("failed to read headers: {}", e),
            })?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            return Err(TabularError::EmptyTable);
        }

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| TabularError::Malformed {
                format: "csv",
                reason: format!("row {}: {}", index + 1, e),
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    fn from_xlsx(path: &Path) -> TabularResult<Self> {
        use calamine::{open_workbook, DataType, Reader, Xlsx};

        let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e: calamine::XlsxError| TabularError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(TabularError::EmptyTable)?
            .map_err(|e| TabularError::Malformed {
                format: "xlsx",
                reason: e.to_string(),
            })?;

        let mut row_iter = range.rows();
        let headers: Vec<String> = row_iter
            .next()
            .ok_or(TabularError::EmptyTable)?
            .iter()
            .map(|cell| cell.as_string().unwrap_or_else(|| format!("{}", cell)))
            .collect();

        let rows = row_iter
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_string().unwrap_or_else(|| format!("{}", cell)))
                    .collect()
            })
            .collect();

        Ok(Self { headers, rows })
    }

    fn read_file(path: &Path) -> TabularResult<String> {
        fs::read_to_string(path).map_err(|e| TabularError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// The header names, in column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows (the header row is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the named column, string-coerced, in row order.
    ///
    /// Rows shorter than the header row yield an empty string for the
    /// column rather than dropping the row, so the result always has one
    /// value per data row.
    pub fn column(&self, name: &str) -> TabularResult<Vec<String>> {
        let index = self
            .headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| TabularError::MissingColumn(name.to_string()))?;

        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect())
    }
}
