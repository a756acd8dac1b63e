use serde::Deserialize;
use std::path::Path;

use crate::reader::MalformedLinePolicy;

const DEFAULT_CONFIG_FILE: &str = "traffic-counter.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// How many busiest half hours to list (ties may add more).
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Length, in half hours, of the quietest period searched for.
    #[serde(default = "default_period_length")]
    pub period_length: usize,
}

fn default_top_n() -> usize {
    3
}

fn default_period_length() -> usize {
    3
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            period_length: default_period_length(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub on_malformed: MalformedLinePolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl AppConfig {
    /// Reads `$CONFIG_FILE` if set (it must exist), else `traffic-counter.toml`
    /// when present, else defaults.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_path(DEFAULT_CONFIG_FILE)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.report.top_n > 0,
            "report.top_n must be > 0, got {}",
            self.report.top_n
        );
        anyhow::ensure!(
            self.report.period_length > 0,
            "report.period_length must be > 0, got {}",
            self.report.period_length
        );
        Ok(())
    }
}
