//! Tabular file ingestion and result export.
//!
//! The pipeline itself only needs a named column iterated in row order;
//! this module supplies that from CSV/TSV/XLSX files and writes the
//! aggregated results back out as CSV.

mod reader;
mod writer;

pub use reader::TabularSource;
pub use writer::{write_csv, write_csv_file};
