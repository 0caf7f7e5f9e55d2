//! View projection: combine the data store and the filter state into the
//! sequences handed to a renderer.
//!
//! Everything here is pure and recomputed from scratch on every render.
//! All three filters use the same inclusive `start <= date <= end` test, so an
//! inverted range yields three empty sequences.

use chrono::NaiveDate;

use crate::data::DataStore;
use crate::domain::{ChangePoint, DateRange, EventRecord, PricePoint};
use crate::filter::{FilterState, SelectedEvents};

pub mod marker;
pub mod style;

pub use marker::{Marker, MarkerKind, change_point_label};

/// Prices whose date lies in `range`.
pub fn filter_prices(prices: &[PricePoint], range: DateRange) -> Vec<PricePoint> {
    prices
        .iter()
        .filter(|p| range.contains(p.date))
        .copied()
        .collect()
}

/// Events that are selected and whose date lies in `range`.
pub fn filter_events(
    events: &[EventRecord],
    selected: &SelectedEvents,
    range: DateRange,
) -> Vec<EventRecord> {
    events
        .iter()
        .filter(|e| selected.contains(&e.name) && range.contains(e.date))
        .cloned()
        .collect()
}

/// Change points whose date lies in `range`. Event selection does not apply.
pub fn filter_change_points(change_points: &[ChangePoint], range: DateRange) -> Vec<ChangePoint> {
    change_points
        .iter()
        .filter(|cp| range.contains(cp.date))
        .cloned()
        .collect()
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub range: DateRange,
    pub prices: Vec<PricePoint>,
    pub events: Vec<EventRecord>,
    pub change_points: Vec<ChangePoint>,
}

/// Run the three filters against the current state.
pub fn project(store: &DataStore, filter: &FilterState) -> ChartView {
    let range = filter.range();
    ChartView {
        range,
        prices: filter_prices(store.prices(), range),
        events: filter_events(store.events(), filter.selected(), range),
        change_points: filter_change_points(store.change_points(), range),
    }
}

impl ChartView {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.events.is_empty() && self.change_points.is_empty()
    }

    /// Event markers followed by change-point markers.
    pub fn markers(&self) -> Vec<Marker> {
        self.events
            .iter()
            .map(Marker::from_event)
            .chain(self.change_points.iter().map(Marker::from_change_point))
            .collect()
    }

    /// Horizontal axis domain.
    ///
    /// The filtered prices define it; marker dates outside the sampled span
    /// widen it so every marker stays visible. `None` when nothing is in range.
    pub fn x_domain(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self
            .prices
            .iter()
            .map(|p| p.date)
            .chain(self.events.iter().map(|e| e.date))
            .chain(self.change_points.iter().map(|cp| cp.date));

        dates.fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
    }

    /// Vertical axis domain with 5% padding. `None` without prices.
    pub fn y_domain(&self) -> Option<(f64, f64)> {
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in &self.prices {
            y_min = y_min.min(p.price);
            y_max = y_max.max(p.price);
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        if y_max <= y_min {
            return Some((y_min - 1.0, y_max + 1.0));
        }
        let pad = (y_max - y_min) * 0.05;
        Some((y_min - pad, y_max + pad))
    }

    /// The price sample closest to `date` (earlier sample wins ties).
    pub fn nearest_price(&self, date: NaiveDate) -> Option<&PricePoint> {
        self.prices
            .iter()
            .min_by_key(|p| ((p.date - date).num_days().abs(), p.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn offset(days: u16) -> NaiveDate {
        d(1987, 5, 20) + chrono::Duration::days(i64::from(days))
    }

    fn event(name: &str, date: NaiveDate) -> EventRecord {
        EventRecord {
            name: name.to_string(),
            date,
        }
    }

    fn change_point(date: NaiveDate) -> ChangePoint {
        ChangePoint {
            date,
            description: "shift".to_string(),
            mean_before: 1.0,
            mean_after: 2.0,
        }
    }

    fn scenario_prices() -> Vec<PricePoint> {
        vec![
            PricePoint { date: d(1990, 1, 1), price: 20.0 },
            PricePoint { date: d(1990, 6, 1), price: 22.0 },
            PricePoint { date: d(1991, 1, 1), price: 19.0 },
        ]
    }

    #[test]
    fn prices_in_1990_keep_first_two_points() {
        let range = DateRange::new(d(1990, 1, 1), d(1990, 12, 31));
        let out = filter_prices(&scenario_prices(), range);
        assert_eq!(out, scenario_prices()[..2].to_vec());
    }

    #[test]
    fn bounds_are_inclusive_on_both_ends() {
        let range = DateRange::new(d(1990, 1, 1), d(1991, 1, 1));
        assert_eq!(filter_prices(&scenario_prices(), range).len(), 3);
    }

    #[test]
    fn unselected_event_is_hidden_even_when_in_range() {
        let events = vec![event("Gulf War", d(1990, 8, 2))];
        let out = filter_events(&events, &SelectedEvents::default(), DateRange::default());
        assert!(out.is_empty());
    }

    #[test]
    fn selected_event_in_range_is_shown() {
        let events = vec![event("Gulf War", d(1990, 8, 2)), event("Other", d(1990, 9, 1))];
        let selected: SelectedEvents = ["Gulf War"].into_iter().collect();
        let out = filter_events(&events, &selected, DateRange::default());
        assert_eq!(out, vec![event("Gulf War", d(1990, 8, 2))]);
    }

    #[test]
    fn change_points_ignore_event_selection() {
        let mut store = DataStore::new();
        store.set_change_points(vec![change_point(d(2008, 7, 11))]);
        store.set_events(vec![event("shift", d(2008, 7, 11))]);

        let filter = FilterState::default();
        let view = project(&store, &filter);
        assert!(view.events.is_empty());
        assert_eq!(view.change_points.len(), 1);
    }

    #[test]
    fn inverted_range_empties_everything() {
        let mut store = DataStore::new();
        store.set_prices(scenario_prices());
        store.set_events(vec![event("Gulf War", d(1990, 8, 2))]);
        store.set_change_points(vec![change_point(d(1990, 6, 1))]);

        let mut filter = FilterState::new(DateRange::new(d(1991, 1, 1), d(1990, 1, 1)));
        filter.select_all(store.event_names());

        let view = project(&store, &filter);
        assert!(view.is_empty());
        assert_eq!(view.x_domain(), None);
    }

    #[test]
    fn empty_collections_project_to_empty_sequences() {
        let view = project(&DataStore::new(), &FilterState::default());
        assert!(view.is_empty());
        assert!(view.markers().is_empty());
        assert_eq!(view.y_domain(), None);
    }

    #[test]
    fn markers_carry_category_and_label() {
        let view = ChartView {
            range: DateRange::default(),
            prices: scenario_prices(),
            events: vec![event("Gulf War", d(1990, 8, 2))],
            change_points: vec![change_point(d(1990, 3, 15))],
        };
        let markers = view.markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].kind, MarkerKind::Event);
        assert_eq!(markers[0].label, "Gulf War");
        assert_eq!(markers[1].kind, MarkerKind::ChangePoint);
        assert_eq!(markers[1].label, "shift (Mean: 1 → 2)");
    }

    #[test]
    fn x_domain_spans_prices_and_widens_for_markers() {
        let view = ChartView {
            range: DateRange::default(),
            prices: scenario_prices(),
            events: vec![event("Late", d(1991, 3, 1))],
            change_points: Vec::new(),
        };
        assert_eq!(view.x_domain(), Some((d(1990, 1, 1), d(1991, 3, 1))));
    }

    #[test]
    fn x_domain_without_prices_uses_marker_dates() {
        let view = ChartView {
            range: DateRange::default(),
            prices: Vec::new(),
            events: Vec::new(),
            change_points: vec![change_point(d(2000, 1, 1)), change_point(d(1999, 1, 1))],
        };
        assert_eq!(view.x_domain(), Some((d(1999, 1, 1), d(2000, 1, 1))));
    }

    #[test]
    fn y_domain_is_padded() {
        let view = ChartView {
            range: DateRange::default(),
            prices: scenario_prices(),
            events: Vec::new(),
            change_points: Vec::new(),
        };
        let (lo, hi) = view.y_domain().unwrap();
        assert!((lo - 18.85).abs() < 1e-9);
        assert!((hi - 22.15).abs() < 1e-9);
    }

    #[test]
    fn nearest_price_handles_dates_between_samples() {
        let view = ChartView {
            range: DateRange::default(),
            prices: scenario_prices(),
            events: Vec::new(),
            change_points: Vec::new(),
        };
        assert_eq!(view.nearest_price(d(1990, 5, 20)).unwrap().price, 22.0);
        assert_eq!(view.nearest_price(d(1989, 1, 1)).unwrap().price, 20.0);
    }

    #[quickcheck]
    fn filters_return_exactly_the_inclusive_subset(days: Vec<u16>, start: u16, end: u16) -> bool {
        let range = DateRange::new(offset(start), offset(end));
        let prices: Vec<PricePoint> = days
            .iter()
            .map(|&n| PricePoint { date: offset(n), price: f64::from(n) })
            .collect();
        let cps: Vec<ChangePoint> = days.iter().map(|&n| change_point(offset(n))).collect();

        let expected = days.iter().filter(|&&n| start <= n && n <= end).count();
        let out_prices = filter_prices(&prices, range);
        let out_cps = filter_change_points(&cps, range);

        out_prices.len() == expected
            && out_cps.len() == expected
            && out_prices.iter().all(|p| range.start <= p.date && p.date <= range.end)
            && out_cps.iter().all(|cp| range.start <= cp.date && cp.date <= range.end)
    }

    #[quickcheck]
    fn inverted_ranges_always_yield_nothing(days: Vec<u16>, a: u16, b: u16) -> bool {
        if a == b {
            return true;
        }
        let range = DateRange::new(offset(a.max(b)), offset(a.min(b)));
        let prices: Vec<PricePoint> = days
            .iter()
            .map(|&n| PricePoint { date: offset(n), price: 1.0 })
            .collect();
        let events: Vec<EventRecord> = days.iter().map(|&n| event("e", offset(n))).collect();
        let cps: Vec<ChangePoint> = days.iter().map(|&n| change_point(offset(n))).collect();
        let selected: SelectedEvents = ["e"].into_iter().collect();

        filter_prices(&prices, range).is_empty()
            && filter_events(&events, &selected, range).is_empty()
            && filter_change_points(&cps, range).is_empty()
    }

    #[quickcheck]
    fn deselected_events_never_appear(days: Vec<u16>, start: u16, end: u16) -> bool {
        let range = DateRange::new(offset(start), offset(end));
        let events: Vec<EventRecord> = days
            .iter()
            .enumerate()
            .map(|(i, &n)| event(if i % 2 == 0 { "kept" } else { "hidden" }, offset(n)))
            .collect();
        let selected: SelectedEvents = ["kept"].into_iter().collect();

        filter_events(&events, &selected, range)
            .iter()
            .all(|e| e.name == "kept")
    }
}
