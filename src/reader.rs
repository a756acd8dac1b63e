// Line reader: one record per line, malformed lines handled per policy.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{Record, RecordParseError};

/// What to do with a line that does not parse as a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Fail the whole batch on the first malformed line.
    #[default]
    Abort,
    /// Log the line at WARN and keep going.
    Skip,
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: RecordParseError,
    },
}

/// Parses every non-blank line of `reader` into a record. A line that is not valid
/// UTF-8 counts as malformed and follows `policy` like any other.
/// Line numbers in errors and logs are 1-based.
#[instrument(skip(reader))]
pub fn read_records<R: BufRead>(
    reader: R,
    policy: MalformedLinePolicy,
) -> Result<Vec<Record>, ReadError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let text = line.trim_ascii();
        if text.is_empty() {
            continue;
        }
        match Record::try_from(text) {
            Ok(record) => records.push(record),
            Err(source) => match policy {
                MalformedLinePolicy::Abort => {
                    return Err(ReadError::Malformed {
                        line: idx + 1,
                        source,
                    });
                }
                MalformedLinePolicy::Skip => {
                    warn!(line = idx + 1, error = %source, "skipping malformed record");
                    skipped += 1;
                }
            },
        }
    }
    debug!(records = records.len(), skipped, "records read");
    Ok(records)
}

pub fn read_records_from_path(
    path: impl AsRef<Path>,
    policy: MalformedLinePolicy,
) -> Result<Vec<Record>, ReadError> {
    let file = File::open(path.as_ref())?;
    read_records(BufReader::new(file), policy)
}
