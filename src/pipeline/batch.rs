//! Batch orchestration over tabular rows.

use super::record_validator::RecordValidator;
use crate::authority::NumberingPlan;
use crate::domain::RegionCode;
use crate::models::BatchRecord;

/// Validate every row in order, invoking `on_progress` with the completed
/// fraction after each row.
///
/// Row failures never stop the batch: the output always holds one record
/// per input row, in input order, with the raw value preserved verbatim on
/// each. For a non-empty batch the callback sees a strictly increasing
/// sequence ending at exactly 1.0; an empty batch returns immediately
/// without invoking it.
pub fn validate_batch<A, F>(
    validator: &RecordValidator<A>,
    rows: &[String],
    region: &RegionCode,
    mut on_progress: F,
) -> Vec<BatchRecord>
where
    A: NumberingPlan,
    F: FnMut(f64),
{
    let total = rows.len();
    let mut results = Vec::with_capacity(total);

    for (index, raw) in rows.iter().enumerate() {
        let outcome = validator.validate_record(raw, region);
        results.push(BatchRecord {
            original: raw.clone(),
            outcome,
        });
        on_progress((index + 1) as f64 / total as f64);
    }

    results
}
