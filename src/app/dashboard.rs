//! Shared dashboard state used by both the report command and the TUI.
//!
//! `Dashboard` owns the data store and the filter state. It is the only place
//! either is mutated, and every mutation bumps `revision` so a front-end can
//! tell when it has to recompute the view and redraw.

use chrono::NaiveDate;

use crate::data::{DataStore, Dataset, FetchOutcome};
use crate::domain::{DateBound, DateRange};
use crate::filter::FilterState;
use crate::view::{ChartView, project};

#[derive(Debug, Clone)]
pub struct Dashboard {
    store: DataStore,
    filter: FilterState,
    pending: Vec<Dataset>,
    revision: u64,
}

impl Dashboard {
    pub fn new(range: DateRange) -> Self {
        Self {
            store: DataStore::new(),
            filter: FilterState::new(range),
            pending: Dataset::ALL.to_vec(),
            revision: 0,
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Datasets whose retrieval has not reported yet.
    pub fn pending(&self) -> &[Dataset] {
        &self.pending
    }

    /// Fold one retrieval result into the store.
    ///
    /// A successful events retrieval re-selects every fetched event name.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        let dataset = outcome.dataset();
        self.pending.retain(|d| *d != dataset);
        if self.store.apply(outcome) == Some(Dataset::Events) {
            self.filter.select_all(self.store.event_names());
        }
        self.bump();
    }

    pub fn set_date_bound(&mut self, which: DateBound, value: NaiveDate) {
        self.filter.set_date_bound(which, value);
        self.bump();
    }

    pub fn toggle_event(&mut self, name: &str) {
        self.filter.toggle_event(name);
        self.bump();
    }

    /// Full recomputation of the three filtered sequences.
    pub fn view(&self) -> ChartView {
        project(&self.store, &self.filter)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
