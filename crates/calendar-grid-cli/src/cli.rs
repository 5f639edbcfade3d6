//! Command-line definition and logging setup.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use calendar_grid::WeekStartDay;
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "calgrid", version, about = "Month and week calendar views in the terminal")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// TOML file with calendar settings.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// First day of the week (sunday or monday).
    #[arg(long, global = true, value_name = "DAY")]
    pub week_start: Option<WeekStartDay>,

    /// Vertical units per hour in the week view.
    #[arg(long, global = true, value_name = "N")]
    pub units_per_hour: Option<f64>,

    /// Minimum block height in the week view.
    #[arg(long, global = true, value_name = "N")]
    pub min_height: Option<f64>,

    /// More log output (repeat for more).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the 6-week grid for a month.
    Month {
        /// Any date in the month to show (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// JSON array of events.
        #[arg(long, value_name = "FILE")]
        events: Option<PathBuf>,
        /// Highlight this date as selected.
        #[arg(long)]
        selected: Option<NaiveDate>,
    },
    /// Show the week containing a date, with block geometry.
    Week {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_name = "FILE")]
        events: Option<PathBuf>,
    },
    /// List the events on one date.
    Day {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, value_name = "FILE")]
        events: Option<PathBuf>,
    },
    /// Validate an event draft (JSON object).
    Validate {
        file: PathBuf,
        /// Print per-field errors as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print a default event draft for a date.
    Template {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print a fresh event id.
    NewId,
}

/// Default filter directive: `warn`, lowered by `-q`, raised by `-v`.
/// Quiet wins when both are given.
fn default_log_level(verbose: u8, quiet: u8) -> &'static str {
    match (quiet, verbose) {
        (0, 0) => "warn",
        (0, 1) => "info",
        (0, 2) => "debug",
        (0, _) => "trace",
        (1, _) => "error",
        _ => "off",
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the flags.
pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_log_level(verbose, quiet))
            .map_err(|e| anyhow!("bad log filter: {e}"))?,
    };

    let stderr_is_tty = std::io::stderr().is_terminal();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(stderr_is_tty)
        .try_init()
        .or_else(|err| {
            tracing::debug!(error = %err, "subscriber already installed");
            Ok(())
        })
}
