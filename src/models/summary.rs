// Derived views handed to the report: per-day totals and least-traffic periods.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Record, total_count};

/// Total cars counted on one calendar day (`date` is `YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    pub date: String,
    pub count: i128,
}

/// A window of contiguous records reduced to its first/last timestamp and total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub total: i128,
}

impl PeriodSummary {
    /// Returns None for an empty window.
    pub fn from_window(window: &[Record]) -> Option<Self> {
        let first = window.first()?;
        let last = window.last()?;
        Some(Self {
            start: first.timestamp(),
            end: last.timestamp(),
            total: total_count(window),
        })
    }
}
