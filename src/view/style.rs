//! Fixed palette for the chart's three visual categories.
//!
//! Colours are kept backend-neutral here; the TUI and the plotters widget
//! convert them to their own colour types.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Price line.
pub const PRICE_LINE: Rgb = Rgb(136, 132, 216);
/// Event markers.
pub const EVENT_MARKER: Rgb = Rgb(255, 0, 0);
/// Change-point markers.
pub const CHANGE_POINT_MARKER: Rgb = Rgb(0, 200, 0);

/// How a marker is stroked, in screen cells (`dash` on, `gap` off).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub color: Rgb,
    pub dash: u16,
    pub gap: u16,
}

pub const EVENT_STROKE: Stroke = Stroke {
    color: EVENT_MARKER,
    dash: 3,
    gap: 3,
};

pub const CHANGE_POINT_STROKE: Stroke = Stroke {
    color: CHANGE_POINT_MARKER,
    dash: 5,
    gap: 5,
};
