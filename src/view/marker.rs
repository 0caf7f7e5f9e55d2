//! Vertical reference markers drawn over the price line.

use chrono::NaiveDate;

use crate::domain::{ChangePoint, EventRecord};
use crate::view::style::{CHANGE_POINT_STROKE, EVENT_STROKE, Stroke};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Event,
    ChangePoint,
}

impl MarkerKind {
    pub fn stroke(self) -> Stroke {
        match self {
            MarkerKind::Event => EVENT_STROKE,
            MarkerKind::ChangePoint => CHANGE_POINT_STROKE,
        }
    }

    /// Character used by the ASCII renderer for this category.
    pub fn glyph(self) -> char {
        match self {
            MarkerKind::Event => '|',
            MarkerKind::ChangePoint => ':',
        }
    }
}

/// A labelled vertical line at `date`.
///
/// `date` need not coincide with a price sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub date: NaiveDate,
    pub label: String,
}

impl Marker {
    pub fn from_event(event: &EventRecord) -> Self {
        Self {
            kind: MarkerKind::Event,
            date: event.date,
            label: event.name.clone(),
        }
    }

    pub fn from_change_point(cp: &ChangePoint) -> Self {
        Self {
            kind: MarkerKind::ChangePoint,
            date: cp.date,
            label: change_point_label(cp),
        }
    }
}

/// `"{description} (Mean: {before} → {after})"`.
pub fn change_point_label(cp: &ChangePoint) -> String {
    format!(
        "{} (Mean: {} → {})",
        cp.description,
        fmt_mean(cp.mean_before),
        fmt_mean(cp.mean_after)
    )
}

/// Shortest round-trip decimal, never in exponent form. Negative zero prints as `0`.
fn fmt_mean(v: f64) -> String {
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_point_label_combines_description_and_means() {
        let cp = ChangePoint {
            date: NaiveDate::from_ymd_opt(2008, 7, 11).unwrap(),
            description: "Financial crisis".to_string(),
            mean_before: 95.5,
            mean_after: 60.0,
        };
        assert_eq!(change_point_label(&cp), "Financial crisis (Mean: 95.5 → 60)");
    }

    #[test]
    fn means_print_without_exponent_or_negative_zero() {
        let cp = ChangePoint {
            date: NaiveDate::from_ymd_opt(2008, 7, 11).unwrap(),
            description: "shift".to_string(),
            mean_before: -0.0,
            mean_after: 1e-7,
        };
        assert_eq!(change_point_label(&cp), "shift (Mean: 0 → 0.0000001)");
    }

    #[test]
    fn event_marker_is_labelled_with_its_name() {
        let event = EventRecord {
            name: "Gulf War".to_string(),
            date: NaiveDate::from_ymd_opt(1990, 8, 2).unwrap(),
        };
        let marker = Marker::from_event(&event);
        assert_eq!(marker.kind, MarkerKind::Event);
        assert_eq!(marker.label, "Gulf War");
        assert_eq!(marker.date, event.date);
    }
}
