//! `slots` CLI — compute shared interview availability from free/busy JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Candidate windows for a request read from stdin
//! slots compute < request.json
//!
//! # From file to file, pinned to a fixed "now"
//! slots compute -i request.json -o windows.json --now 2026-03-16T08:00:00Z
//!
//! # Restrict to an explicit day range and skip weekends
//! slots compute -i request.json --start-date 2026-03-16 --end-date 2026-03-20 --exclude-weekends
//!
//! # Load scheduling policy from a JSON file, then override work hours
//! slots compute -i request.json --policy policy.json --work-hours 10-16
//!
//! # Generate a mock request for interviewers 1 and 2, then solve it
//! slots mock --ids 1,2 --seed 7 | slots -v compute
//! ```

mod logging;
mod mock;

use std::io::{self, Read};

use anyhow::{Context, Result};
use availability_engine::wire::{parse_date, RangeBounds};
use availability_engine::{
    parse_timestamp, AvailabilityEngine, AvailabilityRequest, ParticipantId, SchedulingPolicy,
    TracingSink, WorkWindow,
};
use chrono::Utc;
use clap::{ArgAction, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use logging::{init_logging, level_for, LogFormat};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Find interview windows when every participant is free"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute candidate windows for an availability request
    Compute {
        /// Input request file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// JSON file with a scheduling policy
        #[arg(long)]
        policy: Option<String>,
        /// Work hours as START-END in whole hours, e.g. 9-17
        #[arg(long)]
        work_hours: Option<String>,
        /// Drop Saturdays and Sundays
        #[arg(long)]
        exclude_weekends: bool,
        /// Drop slots starting within this many hours of now
        #[arg(long)]
        min_notice_hours: Option<u32>,
        /// Current instant (ISO 8601); defaults to the system clock
        #[arg(long)]
        now: Option<String>,
        /// First day to evaluate (overrides the request's range)
        #[arg(long, requires = "end_date")]
        start_date: Option<String>,
        /// Last day to evaluate, inclusive
        #[arg(long, requires = "start_date")]
        end_date: Option<String>,
    },
    /// Generate a random availability request
    Mock {
        /// Comma-separated participant ids
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<ParticipantId>,
        /// Number of days busy blocks are spread over
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
        days: u32,
        /// First day of the horizon (defaults to today, UTC)
        #[arg(long)]
        start_date: Option<String>,
        /// Meeting duration in minutes
        #[arg(long, default_value_t = 60)]
        duration: i64,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, level_for(cli.verbose))?;

    match cli.command {
        Commands::Compute {
            input,
            output,
            policy,
            work_hours,
            exclude_weekends,
            min_notice_hours,
            now,
            start_date,
            end_date,
        } => {
            let raw = read_input(input.as_deref())?;
            let mut request: AvailabilityRequest =
                serde_json::from_str(&raw).context("Failed to parse availability request")?;

            if let (Some(start_date), Some(end_date)) = (start_date, end_date) {
                request.range = Some(RangeBounds {
                    start_date,
                    end_date,
                });
            }

            let mut policy = load_policy(policy.as_deref())?;
            if let Some(hours) = work_hours.as_deref() {
                policy.work_window = parse_work_hours(hours)?;
            }
            if exclude_weekends {
                policy.exclude_weekends = true;
            }
            if min_notice_hours.is_some() {
                policy.min_notice_hours = min_notice_hours;
            }

            let now = match now.as_deref() {
                Some(raw) => parse_timestamp(raw).context("Invalid --now")?,
                None => Utc::now(),
            };
            debug!(?policy, %now, "Resolved scheduling policy");

            let sink = TracingSink;
            let windows = AvailabilityEngine::new(policy)
                .with_sink(&sink)
                .evaluate(&request, now)
                .context("Failed to compute availability")?;
            info!(count = windows.len(), "Found candidate windows");

            let json = serde_json::to_string_pretty(&windows)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Mock {
            ids,
            days,
            start_date,
            duration,
            seed,
            output,
        } => {
            let start_date = match start_date.as_deref() {
                Some(raw) => parse_date(raw).context("Invalid --start-date")?,
                None => Utc::now().date_naive(),
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let request = mock::mock_request(&mut rng, &ids, start_date, days, duration);
            let json = serde_json::to_string_pretty(&request)?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

/// Policy from a JSON file, or the default policy when no file is given.
fn load_policy(path: Option<&str>) -> Result<SchedulingPolicy> {
    let Some(path) = path else {
        return Ok(SchedulingPolicy::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read policy file: {}", path))?;
    let policy: SchedulingPolicy = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse policy file: {}", path))?;
    Ok(policy)
}

/// Parse `START-END` whole hours, e.g. `9-17`.
fn parse_work_hours(raw: &str) -> Result<WorkWindow> {
    let (start, end) = raw
        .split_once('-')
        .with_context(|| format!("Invalid --work-hours '{}': expected START-END", raw))?;
    let start: u32 = start
        .trim()
        .parse()
        .with_context(|| format!("Invalid start hour in '{}'", raw))?;
    let end: u32 = end
        .trim()
        .parse()
        .with_context(|| format!("Invalid end hour in '{}'", raw))?;
    Ok(WorkWindow::new(start, end)?)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
