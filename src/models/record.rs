// One half-hourly car count sample and its one-line text form.

use std::fmt;
use std::num::ParseIntError;
use std::str::{FromStr, Utf8Error};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamp layout of the text form. `%.f` prints nothing for whole seconds.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// ISO-8601 without seconds, also accepted on input.
const TIMESTAMP_FORMAT_MINUTES: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordParseError {
    #[error("line is not valid UTF-8: {0}")]
    NotUtf8(#[from] Utf8Error),
    #[error("missing space between timestamp and count in {0:?}")]
    MissingSeparator(String),
    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid count {value:?}: {source}")]
    Count {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// A car count taken at a (timezone-naive) point in time.
///
/// Text form is `YYYY-MM-DDThh:mm:ss <count>`, e.g. `2021-12-01T05:00:00 5`.
/// Counts are not range-checked: a negative count parses and is summed like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    timestamp: NaiveDateTime,
    count: i64,
}

impl Record {
    pub fn new(timestamp: NaiveDateTime, count: i64) -> Self {
        Self { timestamp, count }
    }

    /// Split `s` on its first space into an ISO-8601 date-time and a base-10 count.
    /// Seconds may be omitted from the date-time (`2021-12-01T05:00`).
    pub fn parse(s: &str) -> Result<(NaiveDateTime, i64), RecordParseError> {
        let (ts, count) = s
            .split_once(' ')
            .ok_or_else(|| RecordParseError::MissingSeparator(s.to_string()))?;
        let timestamp = NaiveDateTime::from_str(ts)
            .or_else(|e| {
                NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT_MINUTES).map_err(|_| e)
            })
            .map_err(|source| RecordParseError::Timestamp {
                value: ts.to_string(),
                source,
            })?;
        let count = count
            .trim()
            .parse::<i64>()
            .map_err(|source| RecordParseError::Count {
                value: count.to_string(),
                source,
            })?;
        Ok((timestamp, count))
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Calendar date of the sample.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

impl FromStr for Record {
    type Err = RecordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (timestamp, count) = Record::parse(s)?;
        Ok(Record::new(timestamp, count))
    }
}

impl TryFrom<&[u8]> for Record {
    type Error = RecordParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        std::str::from_utf8(bytes)?.parse()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.count
        )
    }
}

/// Sum of all counts; 0 for an empty slice.
/// Accumulates in `i128` so that no batch of `i64` counts can overflow it.
pub fn total_count(records: &[Record]) -> i128 {
    records.iter().map(|r| i128::from(r.count)).sum()
}
