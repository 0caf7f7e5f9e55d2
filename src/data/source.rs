//! Data source trait definition.

use crate::domain::{ChangePoint, EventRecord, PricePoint};
use crate::error::FetchError;

/// Anything that can serve the three dashboard collections.
///
/// Each method is one independent retrieval. Implementations must be shareable
/// across the loader's worker threads.
pub trait DataSource: Send + Sync {
    fn prices(&self) -> Result<Vec<PricePoint>, FetchError>;
    fn events(&self) -> Result<Vec<EventRecord>, FetchError>;
    fn change_points(&self) -> Result<Vec<ChangePoint>, FetchError>;
}
