//! outage-schedule CLI - read outage intervals off a schedule image.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use outage_schedule::calendar::EventSchedule;
use outage_schedule::report::{comparison_table, ComparisonEntry, QueueReport};
use outage_schedule::{Analyzer, Config};

/// Decode power-outage intervals per queue from a schedule image.
#[derive(Parser, Debug)]
#[command(name = "outage-schedule")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file overriding palette, rows, threshold or geometry.
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum RGB distance to a queue color that still counts as an outage.
    #[arg(short, long, global = true, value_name = "FLOAT")]
    threshold: Option<f64>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the outage report of one queue as JSON.
    Analyze {
        /// Schedule image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Queue label, e.g. "Черга 3-2".
        #[arg(short, long, default_value = "Черга 1-1")]
        queue: String,

        /// Schedule date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Write the report to a file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Compare total outage time of every queue.
    Compare {
        /// Schedule image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Schedule date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Print JSON instead of a text table.
        #[arg(long)]
        json: bool,
    },

    /// Print calendar events with reminders for one queue as JSON.
    Events {
        /// Schedule image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Queue label, e.g. "Черга 3-2".
        #[arg(short, long, default_value = "Черга 1-1")]
        queue: String,

        /// Schedule date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long, value_name = "DATE")]
        date: Option<NaiveDate>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("outage_schedule={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }

    let analyzer = Analyzer::new(config).context("Failed to initialize analyzer")?;

    match &args.command {
        Command::Analyze {
            input,
            queue,
            date,
            output,
        } => analyze(&analyzer, input, queue, schedule_date(*date), output.as_deref()),
        Command::Compare { input, date, json } => {
            compare(&analyzer, input, schedule_date(*date), *json)
        }
        Command::Events { input, queue, date } => {
            events(&analyzer, input, queue, schedule_date(*date))
        }
    }
}

fn schedule_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn analyze(
    analyzer: &Analyzer,
    input: &Path,
    queue: &str,
    date: NaiveDate,
    output: Option<&Path>,
) -> Result<()> {
    let result = analyzer
        .process(input, queue)
        .context("Failed to analyze schedule")?;

    let report = QueueReport::new(&result, date, Local::now().naive_local());
    let json = report.to_json()?;

    tracing::info!(
        "{queue}: {} outages, {} год {} хв",
        result.intervals.len(),
        result.duration.hours,
        result.duration.minutes
    );

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Saved report to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn compare(analyzer: &Analyzer, input: &Path, date: NaiveDate, json: bool) -> Result<()> {
    let results = analyzer
        .process_all(input)
        .context("Failed to analyze schedule")?;
    let entries: Vec<ComparisonEntry> = results.iter().map(ComparisonEntry::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", comparison_table(date, &entries));
    }

    Ok(())
}

fn events(analyzer: &Analyzer, input: &Path, queue: &str, date: NaiveDate) -> Result<()> {
    let result = analyzer
        .process(input, queue)
        .context("Failed to analyze schedule")?;

    let schedule = EventSchedule::new(date, queue, &result.clock_ranges())
        .context("Failed to build calendar events")?;
    println!("{}", schedule.to_json()?);

    Ok(())
}
