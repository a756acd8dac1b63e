// Busiest-records and quietest-window selection. Both keep ties instead of
// cutting them arbitrarily, so results can hold more than `n` entries.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::TimeDelta;

use super::grouping::group_by_contiguity;
use crate::models::{Record, total_count};

/// Records with the `n` highest counts, extended by every record tying the last
/// count taken. Output keeps the order of `records`.
pub(crate) fn top_n(records: &[Record], n: usize) -> Vec<Record> {
    if n == 0 {
        return Vec::new();
    }
    if records.len() <= n {
        return records.to_vec();
    }

    // Bucket sizes per distinct count; buckets are taken whole, highest first.
    let mut buckets: BTreeMap<i64, usize> = BTreeMap::new();
    for record in records {
        *buckets.entry(record.count()).or_default() += 1;
    }
    let mut taken = 0usize;
    let mut cutoff = i64::MIN;
    for (&count, &size) in buckets.iter().rev() {
        taken += size;
        cutoff = count;
        if taken >= n {
            break;
        }
    }

    records
        .iter()
        .filter(|r| r.count() >= cutoff)
        .copied()
        .collect()
}

/// Every window of `n` consecutive records inside one contiguity group whose
/// total is the smallest of all such windows. Windows come out in scan order:
/// groups left to right, then start offset within a group.
pub(crate) fn least_period(records: &[Record], n: usize, resolution: TimeDelta) -> Vec<&[Record]> {
    if n == 0 || records.is_empty() {
        return Vec::new();
    }

    let mut best_total: Option<i128> = None;
    let mut best: Vec<&[Record]> = Vec::new();
    let groups = group_by_contiguity(records, resolution);
    for group in groups.into_iter().filter(|g| g.len() >= n) {
        for window in group.windows(n) {
            let total = total_count(window);
            match best_total.map(|b| total.cmp(&b)) {
                None | Some(Ordering::Less) => {
                    best_total = Some(total);
                    best.clear();
                    best.push(window);
                }
                Some(Ordering::Equal) => best.push(window),
                Some(Ordering::Greater) => {}
            }
        }
    }
    best
}
