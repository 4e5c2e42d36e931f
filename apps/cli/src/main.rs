use anyhow::{Context, Result};
use clap::Parser;
use monitor_core::{load_settings, Clock, FormState, Settings, SystemClock};
use shared::protocol::ReadingReport;
use tracing_subscriber::EnvFilter;

/// Classify an AQI reading and print its category, advisory and a tip.
#[derive(Parser, Debug)]
#[command(name = "aqi-check")]
struct Args {
    /// AQI value to check.
    #[arg(allow_hyphen_values = true)]
    value: String,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
    /// Seed for tip selection.
    #[arg(long)]
    seed: Option<u64>,
    /// Locale for the timestamp, e.g. en_US.
    #[arg(long)]
    locale: Option<String>,
    /// Fixed UTC offset for the timestamp, e.g. +02:00.
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<String>,
}

impl Args {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(locale) = &self.locale {
            settings.locale = Some(locale.clone());
        }
        if let Some(offset) = &self.utc_offset {
            settings.utc_offset = Some(offset.clone());
        }
        if self.seed.is_some() {
            settings.tip_seed = self.seed;
        }
        settings
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.apply(load_settings());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = check(&args, &settings, &SystemClock)?;
    println!("{output}");
    Ok(())
}

fn check(args: &Args, settings: &Settings, clock: &dyn Clock) -> Result<String> {
    let formatter = settings.timestamp_formatter();
    let mut tips = settings.tip_picker();
    let state = FormState::new()
        .update_input(args.value.as_str())
        .submit(clock, &mut tips)?;

    let report = state
        .report(&formatter)
        .context("accepted reading has no classification")?;
    if args.json {
        return serde_json::to_string_pretty(&report).context("failed to encode report");
    }
    Ok(render_text(&report))
}

fn render_text(report: &ReadingReport) -> String {
    let mut lines = vec![
        format!("AQI: {}", report.aqi),
        format!(
            "Category: {} ({}, {})",
            report.category_label, report.color_name, report.color
        ),
        format!("Advisory: {}", report.advisory),
        format!("Date & time: {}", report.recorded_at_display),
    ];
    if let Some(tip) = &report.tip {
        lines.push(format!("Tip: {tip}"));
    }
    lines.join("\n")
}
