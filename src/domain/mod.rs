//! Domain types used throughout the dashboard.
//!
//! This module defines:
//!
//! - the three fetched record kinds (`PricePoint`, `EventRecord`, `ChangePoint`)
//! - the user-controlled window (`DateRange`, `DateBound`)
//! - runtime configuration (`DashboardConfig`)

pub mod types;

pub use types::*;
