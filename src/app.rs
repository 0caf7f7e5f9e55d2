//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - starts the three retrievals
//! - hands the dashboard state to the TUI or prints a report

use std::sync::Arc;

use clap::Parser;

use crate::cli::{Command, CommonArgs, ReportArgs};
use crate::data::{ApiClient, DataSource, fetch_all};
use crate::domain::DateRange;
use crate::error::AppError;

pub mod dashboard;

pub use dashboard::Dashboard;

/// Entry point for the `brent` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // We want `brent` and `brent --start 1990-01-01` to behave like `brent tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Report(args) => handle_report(args),
    }
}

fn handle_tui(args: CommonArgs) -> Result<(), AppError> {
    let config = args.to_config();
    crate::logging::init_file(&config.log_file)?;
    log::info!("Starting dashboard against {}", config.api_url);

    let source: Arc<dyn DataSource> = Arc::new(ApiClient::new(&config.api_url)?);
    crate::tui::run(&config, source)
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    crate::logging::init_stderr();
    let config = args.common.to_config();

    let source: Arc<dyn DataSource> = Arc::new(ApiClient::new(&config.api_url)?);
    let dashboard = load_dashboard(source, config.range, &args.exclude_events)?;

    let view = dashboard.view();
    println!("{}", crate::report::format_summary(&dashboard, &view));
    println!("{}", crate::plot::render_ascii_plot(&view, args.width, args.height));
    Ok(())
}

/// Fetch everything (waiting for each retrieval to resolve or fail), then
/// deselect `excluded` event names.
pub fn load_dashboard(
    source: Arc<dyn DataSource>,
    range: DateRange,
    excluded: &[String],
) -> Result<Dashboard, AppError> {
    let mut dashboard = Dashboard::new(range);
    for outcome in fetch_all(source)? {
        dashboard.apply_outcome(outcome);
    }
    for name in excluded {
        if dashboard.filter().selected().contains(name) {
            dashboard.toggle_event(name);
        } else {
            log::warn!("--exclude-event {name:?} does not match a selected event");
        }
    }
    Ok(dashboard)
}

/// Rewrite argv so `brent` defaults to `brent tui`.
///
/// Rules:
/// - `brent`                      -> `brent tui`
/// - `brent --start X ...`        -> `brent tui --start X ...`
/// - `brent --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "report");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
