// Traffic counter over a fixed, timestamp-sorted batch of records.
// Sorting happens once in `new`; every query reads that sequence and never mutates it.

mod grouping;
mod selection;

pub use crate::models::total_count;

use chrono::TimeDelta;
use tracing::debug;

use crate::models::{DailyTotal, Record};

/// Half-hourly car counter.
///
/// Two records are contiguous when the later one is at most [`TrafficCounter::RESOLUTION_MINUTES`]
/// after the earlier one. Contiguity may cross midnight (and month/year boundaries).
#[derive(Debug, Clone, Default)]
pub struct TrafficCounter {
    records: Vec<Record>,
}

impl TrafficCounter {
    /// Sampling resolution of the counter, in minutes.
    pub const RESOLUTION_MINUTES: i64 = 30;

    /// Takes ownership of `records` and sorts them by timestamp.
    /// The sort is stable: records sharing a timestamp keep their input order.
    pub fn new(mut records: Vec<Record>) -> Self {
        records.sort_by_key(Record::timestamp);
        debug!(records = records.len(), "traffic counter built");
        Self { records }
    }

    pub fn resolution() -> TimeDelta {
        TimeDelta::minutes(Self::RESOLUTION_MINUTES)
    }

    /// Sorted records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of cars counted.
    pub fn total_count(&self) -> i128 {
        total_count(&self.records)
    }

    /// Records grouped by calendar date, earliest date first.
    pub fn group_by_date(&self) -> Vec<&[Record]> {
        grouping::group_by_date(&self.records)
    }

    /// Records grouped into maximal runs of contiguous samples.
    pub fn group_by_contiguity(&self) -> Vec<&[Record]> {
        grouping::group_by_contiguity(&self.records, Self::resolution())
    }

    /// Cars per calendar date (`YYYY-MM-DD`), earliest date first.
    pub fn count_by_date(&self) -> Vec<DailyTotal> {
        self.group_by_date()
            .into_iter()
            .filter_map(|day| {
                let first = day.first()?;
                Some(DailyTotal {
                    date: first.date().format("%Y-%m-%d").to_string(),
                    count: total_count(day),
                })
            })
            .collect()
    }

    /// The `n` busiest half hours in timestamp order, including ties on the last count
    /// taken (so the result may exceed `n`). All records when `n >= len`, none when `n == 0`.
    pub fn top_n(&self, n: usize) -> Vec<Record> {
        selection::top_n(&self.records, n)
    }

    /// Windows of `n` contiguous half hours with the fewest cars, including ties.
    /// Groups shorter than `n` cannot host a window; empty when none qualifies or `n == 0`.
    pub fn least_period(&self, n: usize) -> Vec<&[Record]> {
        selection::least_period(&self.records, n, Self::resolution())
    }
}

impl FromIterator<Record> for TrafficCounter {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
