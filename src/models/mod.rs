// Domain models

mod record;
mod summary;

pub use record::{Record, RecordParseError, total_count};
pub use summary::{DailyTotal, PeriodSummary};
