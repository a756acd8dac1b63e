use anyhow::{Context, Result};
use traffic_counter::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        println!("{}", version::banner());
        println!("Invoke me with:");
        println!("  {} <file>", version::NAME);
        return Ok(());
    }
    let path = &args[1];

    let app_config = config::AppConfig::load()?;
    let records = reader::read_records_from_path(path, app_config.input.on_malformed)
        .with_context(|| format!("reading records from {path}"))?;
    tracing::info!(records = records.len(), path = %path, "records loaded");

    let counter = counter::TrafficCounter::new(records);
    let report = report::Report::build(&counter, &app_config.report);
    print!("{}", report.render(app_config.output.format)?);

    Ok(())
}
