// Grouping of timestamp-sorted records into calendar days and contiguous runs.
// Both groupings only scan adjacent pairs, so the input must already be sorted.

use chrono::TimeDelta;

use crate::models::Record;

/// Maximal runs of records sharing a calendar date, in input order.
pub(crate) fn group_by_date(records: &[Record]) -> Vec<&[Record]> {
    records.chunk_by(|a, b| a.date() == b.date()).collect()
}

/// Maximal runs where each adjacent gap is at most `resolution`.
/// Only a gap larger than `resolution` starts a new run.
pub(crate) fn group_by_contiguity(records: &[Record], resolution: TimeDelta) -> Vec<&[Record]> {
    records
        .chunk_by(|a, b| b.timestamp() - a.timestamp() <= resolution)
        .collect()
}
