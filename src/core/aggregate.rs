//! Total-hours aggregation over a technician's record set.

use crate::core::duration::WorkDuration;
use crate::models::OvertimeRecord;

/// Sum of per-record durations. Order-independent; records with
/// `end <= start` contribute zero. Empty input yields zero.
pub fn total_duration(records: &[OvertimeRecord]) -> WorkDuration {
    records
        .iter()
        .map(|r| WorkDuration::between(r.start, r.end))
        .fold(WorkDuration::ZERO, |acc, d| acc + d)
}
