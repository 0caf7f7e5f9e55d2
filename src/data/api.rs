//! HTTP client for the dashboard backend (`/api/prices`, `/api/events`,
//! `/api/change_points`).

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::data::{DataSource, Dataset};
use crate::domain::{ChangePoint, EventRecord, PricePoint, parse_iso_date};
use crate::error::{AppError, FetchError};

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` (e.g. `http://localhost:8000`).
    ///
    /// No request timeout is configured: a hung retrieval simply never resolves.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(|e| AppError::new(4, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, dataset: Dataset) -> String {
        format!("{}{}", self.base_url, dataset.path())
    }

    /// Fetch the raw JSON array for `dataset`.
    ///
    /// Records stay untyped here so one malformed record cannot fail the
    /// whole collection; the `decode_*` functions type them one at a time.
    fn get_rows(&self, dataset: Dataset) -> Result<Vec<Value>, FetchError> {
        let url = self.endpoint(dataset);
        log::debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Request { dataset, source })?;

        if !resp.status().is_success() {
            return Err(FetchError::Status {
                dataset,
                status: resp.status(),
            });
        }

        resp.json::<Vec<Value>>().map_err(|e| FetchError::Decode {
            dataset,
            message: e.to_string(),
        })
    }
}

impl DataSource for ApiClient {
    fn prices(&self) -> Result<Vec<PricePoint>, FetchError> {
        self.get_rows(Dataset::Prices).map(decode_prices)
    }

    fn events(&self) -> Result<Vec<EventRecord>, FetchError> {
        self.get_rows(Dataset::Events).map(decode_events)
    }

    fn change_points(&self) -> Result<Vec<ChangePoint>, FetchError> {
        self.get_rows(Dataset::ChangePoints).map(decode_change_points)
    }
}

/// `{Date, Price}` as served by `/api/prices`.
#[derive(Debug, Deserialize)]
pub struct PriceRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Price", default)]
    pub price: Option<f64>,
}

/// `{Event, Date}` as served by `/api/events`.
#[derive(Debug, Deserialize)]
pub struct EventRow {
    #[serde(rename = "Event", default)]
    pub event: Option<String>,
    #[serde(rename = "Date")]
    pub date: String,
}

/// `{Date, Description, Mean_Before, Mean_After}` as served by `/api/change_points`.
#[derive(Debug, Deserialize)]
pub struct ChangePointRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Mean_Before", default)]
    pub mean_before: Option<f64>,
    #[serde(rename = "Mean_After", default)]
    pub mean_after: Option<f64>,
}

// A record is dropped on its own when it does not match its row shape (missing
// or null `Date`, non-numeric `Price`, ...), when its date does not parse, or
// when a required field is absent. `Event` is the selection key and is
// required; `Description` is display-only and defaults to empty.

fn decode_rows<R, T>(dataset: Dataset, values: Vec<Value>, convert: impl Fn(R) -> Option<T>) -> Vec<T>
where
    R: DeserializeOwned,
{
    let total = values.len();
    let out: Vec<T> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<R>(value).ok())
        .filter_map(convert)
        .collect();
    warn_dropped(dataset, total, out.len());
    out
}

pub fn decode_prices(values: Vec<Value>) -> Vec<PricePoint> {
    decode_rows(Dataset::Prices, values, |row: PriceRow| {
        let date = parse_iso_date(&row.date)?;
        let price = row.price.filter(|p| p.is_finite())?;
        Some(PricePoint { date, price })
    })
}

pub fn decode_events(values: Vec<Value>) -> Vec<EventRecord> {
    decode_rows(Dataset::Events, values, |row: EventRow| {
        let date = parse_iso_date(&row.date)?;
        let name = row.event.filter(|n| !n.is_empty())?;
        Some(EventRecord { name, date })
    })
}

pub fn decode_change_points(values: Vec<Value>) -> Vec<ChangePoint> {
    decode_rows(Dataset::ChangePoints, values, |row: ChangePointRow| {
        Some(ChangePoint {
            date: parse_iso_date(&row.date)?,
            description: row.description.unwrap_or_default(),
            mean_before: row.mean_before?,
            mean_after: row.mean_after?,
        })
    })
}

fn warn_dropped(dataset: Dataset, total: usize, kept: usize) {
    if kept < total {
        log::warn!("Dropped {} malformed {dataset} record(s) of {total}", total - kept);
    }
}
