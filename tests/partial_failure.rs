use std::sync::Arc;

use brent_dashboard::app::load_dashboard;
use brent_dashboard::data::{DataSource, Dataset};
use brent_dashboard::domain::{ChangePoint, DateBound, DateRange, EventRecord, PricePoint};
use brent_dashboard::error::FetchError;
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Serves prices and events; the change-point endpoint always fails.
struct NoChangePoints;

impl DataSource for NoChangePoints {
    fn prices(&self) -> Result<Vec<PricePoint>, FetchError> {
        Ok(vec![
            PricePoint { date: d(1990, 1, 1), price: 20.0 },
            PricePoint { date: d(1990, 6, 1), price: 22.0 },
            PricePoint { date: d(1991, 1, 1), price: 19.0 },
        ])
    }

    fn events(&self) -> Result<Vec<EventRecord>, FetchError> {
        Ok(vec![
            EventRecord { name: "Gulf War".to_string(), date: d(1990, 8, 2) },
            EventRecord { name: "Desert Storm".to_string(), date: d(1991, 1, 17) },
        ])
    }

    fn change_points(&self) -> Result<Vec<ChangePoint>, FetchError> {
        Err(FetchError::Status {
            dataset: Dataset::ChangePoints,
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        })
    }
}

#[test]
fn failed_change_point_fetch_leaves_other_layers_intact() {
    let range = DateRange::new(d(1990, 1, 1), d(1990, 12, 31));
    let dashboard = load_dashboard(Arc::new(NoChangePoints), range, &[]).unwrap();

    let view = dashboard.view();
    assert!(view.change_points.is_empty());
    assert_eq!(view.prices.len(), 2);
    assert_eq!(view.events.len(), 1);
    assert_eq!(view.events[0].name, "Gulf War");
    assert!(dashboard.pending().is_empty());
}

#[test]
fn excluded_events_are_deselected_after_load() {
    let dashboard = load_dashboard(
        Arc::new(NoChangePoints),
        DateRange::default(),
        &["Gulf War".to_string()],
    )
    .unwrap();

    let names: Vec<String> = dashboard.view().events.into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Desert Storm".to_string()]);
}

#[test]
fn inverted_range_after_load_empties_the_view() {
    let mut dashboard = load_dashboard(Arc::new(NoChangePoints), DateRange::default(), &[]).unwrap();
    dashboard.set_date_bound(DateBound::Start, d(1991, 1, 1));
    dashboard.set_date_bound(DateBound::End, d(1990, 1, 1));

    let view = dashboard.view();
    assert!(view.prices.is_empty());
    assert!(view.events.is_empty());
    assert!(view.change_points.is_empty());
}
