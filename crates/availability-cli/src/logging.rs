//! Tracing subscriber setup for the `slots` binary.
//!
//! Logs always go to stderr so stdout stays machine-readable JSON.
//! `RUST_LOG` overrides the verbosity chosen on the command line.

use anyhow::Result;
use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    /// Single-line output without timestamps
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

/// Map `-v` occurrences to a level: none → warn, `-v` → debug, `-vv` → trace.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once, before any work.
pub fn init_logging(format: LogFormat, level: Level) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(format!(
            "slots={level},availability={level},availability_engine={level}"
        ))
    })?;

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => {
            let layer = fmt::layer().pretty().with_writer(std::io::stderr);
            tracing::subscriber::set_global_default(registry.with(layer))?;
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr);
            tracing::subscriber::set_global_default(registry.with(layer))?;
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            tracing::subscriber::set_global_default(registry.with(layer))?;
        }
    }

    Ok(())
}
