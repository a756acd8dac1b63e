// Report: the four counter views for a configured N and period length,
// rendered as console text or JSON.

use std::fmt;

use serde::Serialize;

use crate::config::{OutputFormat, ReportConfig};
use crate::counter::TrafficCounter;
use crate::models::{DailyTotal, PeriodSummary, Record};

const PERIOD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_count: i128,
    pub daily_totals: Vec<DailyTotal>,
    pub top_n: usize,
    pub top: Vec<Record>,
    pub period_length: usize,
    pub least_periods: Vec<PeriodSummary>,
}

impl Report {
    pub fn build(counter: &TrafficCounter, config: &ReportConfig) -> Self {
        Self {
            total_count: counter.total_count(),
            daily_totals: counter.count_by_date(),
            top_n: config.top_n,
            top: counter.top_n(config.top_n),
            period_length: config.period_length,
            least_periods: counter
                .least_period(config.period_length)
                .into_iter()
                .filter_map(PeriodSummary::from_window)
                .collect(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(self.render_json()?),
        }
    }

    /// Console layout; same as the `Display` output.
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = (self.period_length as i64 * TrafficCounter::RESOLUTION_MINUTES) as f64 / 60.0;
        writeln!(f, "Total number of cars: {}", self.total_count)?;

        writeln!(f, "\nNumber of cars per day:")?;
        for day in &self.daily_totals {
            writeln!(f, "{} {}", day.date, day.count)?;
        }

        writeln!(
            f,
            "\nThe top {} half hours with most cars (may be longer due to ties):",
            self.top_n
        )?;
        for record in &self.top {
            writeln!(f, "{record}")?;
        }

        writeln!(
            f,
            "\nThe {hours} hour period with least cars (maybe more than one period due to ties):"
        )?;
        for period in &self.least_periods {
            writeln!(
                f,
                "{} -- {} {}",
                period.start.format(PERIOD_TIMESTAMP_FORMAT),
                period.end.format(PERIOD_TIMESTAMP_FORMAT),
                period.total
            )?;
        }
        Ok(())
    }
}
