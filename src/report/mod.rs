//! Reporting utilities: formatted terminal output for a projected view.

pub mod format;

pub use format::{format_marker_list, format_summary};
