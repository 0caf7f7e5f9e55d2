//! Concurrent retrieval of the three datasets.
//!
//! Each dataset is fetched as an independent task and posts its result on a
//! channel. There is no ordering between them, no barrier, no cancellation and
//! no retry: the consumer applies whatever has arrived.
//!
//! Retrievals block on HTTP without a timeout, so they run on a dedicated pool
//! with one thread per dataset rather than on rayon's global CPU-sized pool. A
//! hung request can only ever occupy its own thread.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use rayon::ThreadPoolBuilder;

use crate::data::{DataSource, Dataset};
use crate::domain::{ChangePoint, EventRecord, PricePoint};
use crate::error::{AppError, FetchError};

/// Result of one retrieval.
#[derive(Debug)]
pub enum FetchOutcome {
    Prices(Result<Vec<PricePoint>, FetchError>),
    Events(Result<Vec<EventRecord>, FetchError>),
    ChangePoints(Result<Vec<ChangePoint>, FetchError>),
}

impl FetchOutcome {
    pub fn dataset(&self) -> Dataset {
        match self {
            FetchOutcome::Prices(_) => Dataset::Prices,
            FetchOutcome::Events(_) => Dataset::Events,
            FetchOutcome::ChangePoints(_) => Dataset::ChangePoints,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            FetchOutcome::Prices(r) => r.is_ok(),
            FetchOutcome::Events(r) => r.is_ok(),
            FetchOutcome::ChangePoints(r) => r.is_ok(),
        }
    }
}

/// Run a single retrieval on the current thread.
pub fn fetch_one(source: &dyn DataSource, dataset: Dataset) -> FetchOutcome {
    match dataset {
        Dataset::Prices => FetchOutcome::Prices(source.prices()),
        Dataset::Events => FetchOutcome::Events(source.events()),
        Dataset::ChangePoints => FetchOutcome::ChangePoints(source.change_points()),
    }
}

/// Issue all three retrievals concurrently and return the receiving end.
///
/// The channel disconnects once every task has reported. Dropping the pool
/// here is fine: its threads finish the queued retrievals before exiting.
pub fn spawn_fetches(source: Arc<dyn DataSource>) -> Result<Receiver<FetchOutcome>, AppError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(Dataset::ALL.len())
        .thread_name(|i| format!("brent-fetch-{i}"))
        .build()
        .map_err(|e| AppError::new(4, format!("Failed to start fetch threads: {e}")))?;

    let (tx, rx) = mpsc::channel();
    for dataset in Dataset::ALL {
        let source = Arc::clone(&source);
        let tx = tx.clone();
        log::debug!("Fetching {dataset}");
        pool.spawn(move || {
            let outcome = fetch_one(source.as_ref(), dataset);
            // The receiver may already be gone if the UI quit first.
            let _ = tx.send(outcome);
        });
    }
    Ok(rx)
}

/// Issue all three retrievals and wait for every one to resolve or fail.
///
/// Outcomes are returned in completion order.
pub fn fetch_all(source: Arc<dyn DataSource>) -> Result<Vec<FetchOutcome>, AppError> {
    Ok(spawn_fetches(source)?.iter().collect())
}
