//! Command-line parsing for the Brent price dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the filtering/rendering code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_API_URL, DashboardConfig, DateRange, WIDGET_MAX_DATE, WIDGET_MIN_DATE};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "brent", version, about = "Brent oil price dashboard with event and change-point overlays")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive dashboard.
    Tui(CommonArgs),
    /// Fetch everything once, apply the filters, and print a text report.
    Report(ReportArgs),
}

/// Options shared by every front-end.
#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    /// Base URL of the data API.
    #[arg(long, env = "BRENT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// First date shown (inclusive, YYYY-MM-DD).
    #[arg(long, default_value_t = WIDGET_MIN_DATE)]
    pub start: NaiveDate,

    /// Last date shown (inclusive, YYYY-MM-DD).
    #[arg(long, default_value_t = WIDGET_MAX_DATE)]
    pub end: NaiveDate,

    /// Log file used while the terminal UI owns the screen.
    #[arg(long, default_value = "brent-dashboard.log")]
    pub log_file: PathBuf,
}

/// Options for the non-interactive report.
#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Deselect an event by name (repeatable).
    #[arg(long = "exclude-event", value_name = "NAME")]
    pub exclude_events: Vec<String>,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

impl CommonArgs {
    pub fn to_config(&self) -> DashboardConfig {
        DashboardConfig {
            api_url: self.api_url.clone(),
            range: DateRange::new(self.start, self.end),
            log_file: self.log_file.clone(),
        }
    }
}
