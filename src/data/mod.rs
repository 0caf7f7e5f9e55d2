//! Data access: the HTTP client, the `DataSource` seam, the concurrent loader,
//! and the as-received data store.

pub mod api;
pub mod loader;
pub mod source;
pub mod store;

pub use api::ApiClient;
pub use loader::{FetchOutcome, fetch_all, spawn_fetches};
pub use source::DataSource;
pub use store::DataStore;

/// The three independently fetched collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Prices,
    Events,
    ChangePoints,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Prices, Dataset::Events, Dataset::ChangePoints];

    /// API path relative to the configured base URL.
    pub fn path(self) -> &'static str {
        match self {
            Dataset::Prices => "/api/prices",
            Dataset::Events => "/api/events",
            Dataset::ChangePoints => "/api/change_points",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Dataset::Prices => "prices",
            Dataset::Events => "events",
            Dataset::ChangePoints => "change points",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
