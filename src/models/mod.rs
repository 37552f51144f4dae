//! Data models for validation outcomes.
//!
//! This module contains the data structures produced by the validation
//! pipeline: per-record reports, batch records, and the flat rows used for
//! CSV export.

pub mod report;

pub use report::{BatchRecord, RecordOutcome, ResultRow, ValidationReport, UNKNOWN};
