//! As-received storage for the three fetched collections.

use crate::data::{Dataset, FetchOutcome};
use crate::domain::{ChangePoint, EventRecord, PricePoint};

/// Holds prices, events and change points exactly as fetched.
///
/// Every collection starts empty. A successful retrieval replaces it wholesale;
/// a failed one leaves the previous value in place.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    prices: Vec<PricePoint>,
    events: Vec<EventRecord>,
    change_points: Vec<ChangePoint>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prices(&self) -> &[PricePoint] {
        &self.prices
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn change_points(&self) -> &[ChangePoint] {
        &self.change_points
    }

    pub fn set_prices(&mut self, prices: Vec<PricePoint>) {
        self.prices = prices;
    }

    pub fn set_events(&mut self, events: Vec<EventRecord>) {
        self.events = events;
    }

    pub fn set_change_points(&mut self, change_points: Vec<ChangePoint>) {
        self.change_points = change_points;
    }

    /// Distinct event names in fetched order.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.events.len());
        for event in &self.events {
            if !names.contains(&event.name) {
                names.push(event.name.clone());
            }
        }
        names
    }

    /// Apply one retrieval result.
    ///
    /// Returns the dataset that was replaced, or `None` when the retrieval
    /// failed (the failure is logged and the prior value retained).
    pub fn apply(&mut self, outcome: FetchOutcome) -> Option<Dataset> {
        let dataset = outcome.dataset();
        let count = match outcome {
            FetchOutcome::Prices(Ok(prices)) => {
                let n = prices.len();
                self.set_prices(prices);
                n
            }
            FetchOutcome::Events(Ok(events)) => {
                let n = events.len();
                self.set_events(events);
                n
            }
            FetchOutcome::ChangePoints(Ok(change_points)) => {
                let n = change_points.len();
                self.set_change_points(change_points);
                n
            }
            FetchOutcome::Prices(Err(err))
            | FetchOutcome::Events(Err(err))
            | FetchOutcome::ChangePoints(Err(err)) => {
                log::error!("Error fetching {dataset}: {err}");
                return None;
            }
        };
        log::info!("Loaded {count} {dataset}");
        Some(dataset)
    }
}
