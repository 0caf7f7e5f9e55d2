//! `env_logger` setup.
//!
//! The default filter is `info`; `RUST_LOG` overrides it. While the TUI owns the
//! terminal, records are written to a log file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::AppError;

const DEFAULT_FILTER: &str = "info";

/// Log to stderr (report mode).
pub fn init_stderr() {
    let _ = builder().target(Target::Stderr).try_init();
}

/// Log to `path`, appending (TUI mode).
pub fn init_file(path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::new(4, format!("Failed to open log file {}: {e}", path.display())))?;
    let _ = builder().target(Target::Pipe(Box::new(file))).try_init();
    Ok(())
}

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format_timestamp_millis();
    builder
}
