//! Tabular ingestion and export, end to end.

mod mocks;

use std::io::Write as _;

use mocks::MockNumberingPlan;
use phone_validator::{
    validate_batch, write_csv, RecordValidator, RegionCode, TabularError, TabularSource,
};

fn us() -> RegionCode {
    RegionCode::new("US").unwrap()
}

#[test]
fn test_csv_file_round_trip() {
    let mut input = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    writeln!(input, "name,phone").unwrap();
    writeln!(input, "Alice,2025550123").unwrap();
    writeln!(input, "Bob,not a number").unwrap();
    writeln!(input, "Carol,+442071838750").unwrap();
    input.flush().unwrap();

    let source = TabularSource::open(input.path()).unwrap();
    assert_eq!(source.headers(), &["name", "phone"]);

    let rows = source.column("phone").unwrap();
    assert_eq!(rows.len(), 3);

    let validator = RecordValidator::new(MockNumberingPlan::new(), "en");
    let records = validate_batch(&validator, &rows, &us(), |_| {});

    let mut buffer = Vec::new();
    write_csv(&records, &mut buffer).unwrap();
    let output = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    // Header plus one row per input row, in input order.
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("original_number,formatted_number"));
    assert!(lines[1].starts_with("2025550123,"));
    assert!(lines[2].starts_with("not a number,,,,,,,,"));
    assert!(lines[3].starts_with("+442071838750,"));
}

#[test]
fn test_missing_column_aborts_before_validation() {
    let source =
        TabularSource::from_csv_content("name,phone\nAlice,2025550123\n", b',').unwrap();
    let result = source.column("number");
    assert!(matches!(result, Err(TabularError::MissingColumn(_))));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    let result = TabularSource::open(file.path());
    assert!(matches!(result, Err(TabularError::UnsupportedFormat(_))));
}

#[test]
fn test_column_values_keep_row_order_with_gaps() {
    let source = TabularSource::from_csv_content(
        "name,phone\nAlice,2025550123\nBob,\nCarol,+442071838750\n",
        b',',
    )
    .unwrap();
    let rows = source.column("phone").unwrap();
    assert_eq!(rows, vec!["2025550123", "", "+442071838750"]);
}

#[test]
fn test_results_csv_for_failed_rows_keeps_originals() {
    let validator = RecordValidator::new(MockNumberingPlan::new(), "en");
    let rows = vec!["bad one".to_string(), "bad two".to_string()];
    let records = validate_batch(&validator, &rows, &us(), |_| {});

    let mut buffer = Vec::new();
    write_csv(&records, &mut buffer).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.contains("bad one"));
    assert!(output.contains("bad two"));
}
