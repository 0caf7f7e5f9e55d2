//! `brent-dashboard` library crate.
//!
//! The binary (`brent`) is a thin wrapper around this library so that:
//!
//! - the filtering and projection logic is testable without a terminal
//! - the data layer can be driven by any `DataSource`, not only the HTTP API
//! - the TUI and the text report share one state object

pub mod app;
pub mod cli;
pub mod data;
pub mod debug;
pub mod domain;
pub mod error;
pub mod filter;
pub mod logging;
pub mod plot;
pub mod report;
pub mod tui;
pub mod view;
