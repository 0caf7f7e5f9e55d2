//! Text formatting for the report command and the debug bundle.
//!
//! We keep formatting code in one place so output changes stay localized.

use crate::app::dashboard::Dashboard;
use crate::view::{ChartView, Marker, MarkerKind};

/// Summary of the current filter state and the filtered sequences.
pub fn format_summary(dashboard: &Dashboard, view: &ChartView) -> String {
    let mut out = String::new();

    out.push_str("=== Brent Oil Price Dashboard ===\n");
    out.push_str(&format!("Range: {}", view.range));
    if view.range.is_inverted() {
        out.push_str(" (start is after end: nothing in range)");
    }
    out.push('\n');

    let total_names = dashboard.store().event_names().len();
    out.push_str(&format!(
        "Selected events: {} of {total_names}\n",
        dashboard.filter().selected().len()
    ));

    if !dashboard.pending().is_empty() {
        let names: Vec<&str> = dashboard.pending().iter().map(|d| d.display_name()).collect();
        out.push_str(&format!("Still loading: {}\n", names.join(", ")));
    }

    out.push_str(&format_price_stats(view));

    let markers = view.markers();
    out.push_str(&format_marker_list("Event markers", &markers, MarkerKind::Event));
    out.push_str(&format_marker_list(
        "Change-point markers",
        &markers,
        MarkerKind::ChangePoint,
    ));

    out
}

fn format_price_stats(view: &ChartView) -> String {
    let (Some(first), Some(last)) = (view.prices.first(), view.prices.last()) else {
        return "Prices: n=0\n".to_string();
    };

    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in &view.prices {
        lo = lo.min(p.price);
        hi = hi.max(p.price);
    }

    format!(
        "Prices: n={} | first={} {:.2} | last={} {:.2} | min={lo:.2} max={hi:.2} (USD/barrel)\n",
        view.prices.len(),
        first.date,
        first.price,
        last.date,
        last.price,
    )
}

/// One `date  label` line per marker of `kind`.
pub fn format_marker_list(title: &str, markers: &[Marker], kind: MarkerKind) -> String {
    let rows: Vec<&Marker> = markers.iter().filter(|m| m.kind == kind).collect();
    let mut out = format!("{title} ({}):\n", rows.len());
    if rows.is_empty() {
        out.push_str("  (none)\n");
    }
    for m in rows {
        out.push_str(&format!("  {}  {}\n", m.date, m.label));
    }
    out
}
