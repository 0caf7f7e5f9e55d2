//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - held as-received in the data store
//! - filtered and projected on every redraw
//! - written into text reports and debug bundles

use std::path::PathBuf;

use chrono::NaiveDate;

/// Earliest date the date inputs accept.
pub const WIDGET_MIN_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1987, 5, 20) {
    Some(d) => d,
    None => NaiveDate::MIN,
};

/// Latest date the date inputs accept.
pub const WIDGET_MAX_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2022, 9, 30) {
    Some(d) => d,
    None => NaiveDate::MAX,
};

/// Default API host the FastAPI backend listens on.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// One daily price sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// A named real-world event. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub name: String,
    pub date: NaiveDate,
}

/// A detected shift in the mean of the price series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangePoint {
    pub date: NaiveDate,
    pub description: String,
    pub mean_before: f64,
    pub mean_after: f64,
}

/// Inclusive date window.
///
/// `start <= end` is not enforced. An inverted range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `start <= date <= end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn bound(&self, which: DateBound) -> NaiveDate {
        match which {
            DateBound::Start => self.start,
            DateBound::End => self.end,
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: WIDGET_MIN_DATE,
            end: WIDGET_MAX_DATE,
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

/// Which end of a [`DateRange`] a user edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateBound {
    Start,
    End,
}

impl DateBound {
    pub fn display_name(self) -> &'static str {
        match self {
            DateBound::Start => "Start Date",
            DateBound::End => "End Date",
        }
    }
}

/// Clamp a typed date into the range the date inputs accept.
///
/// Only the input widgets call this; the filter state stores whatever it is given.
pub fn clamp_to_widget(date: NaiveDate) -> NaiveDate {
    date.clamp(WIDGET_MIN_DATE, WIDGET_MAX_DATE)
}

/// Runtime configuration shared by the TUI and the report command.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the data API (no trailing `/api`).
    pub api_url: String,
    /// Initial date range.
    pub range: DateRange,
    /// Where the TUI writes its log (stderr is owned by the terminal UI).
    pub log_file: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            range: DateRange::default(),
            log_file: PathBuf::from("brent-dashboard.log"),
        }
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
