//! Plotters-powered price chart widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.
//! Dates are mapped onto an `f64` day axis (days from CE) so marker dates that
//! fall between price samples land at their exact position.

use chrono::{Datelike, NaiveDate};
use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::view::style::{PRICE_LINE, Rgb, Stroke};

/// A vertical marker at `x` drawn with `stroke`.
#[derive(Debug, Clone, Copy)]
pub struct ChartMarker {
    pub x: f64,
    pub stroke: Stroke,
}

/// A lightweight, render-only chart description.
///
/// All series and bounds are computed outside the render call.
pub struct PricePlottersChart<'a> {
    /// Line series for the filtered prices (x in days from CE).
    pub prices: &'a [(f64, f64)],
    /// Event and change-point markers.
    pub markers: &'a [ChartMarker],
    /// Tooltip cursor position, if any.
    pub cursor: Option<f64>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// Map a date onto the chart's x axis.
pub fn date_to_x(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Inverse of [`date_to_x`], rounding to the nearest day.
pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Split a vertical line at `x` into dash segments.
///
/// `rows` is the number of terminal rows the y range occupies; `dash` and `gap`
/// are expressed in rows so the pattern stays readable at any zoom.
pub fn dashed_segments(x: f64, y0: f64, y1: f64, rows: u16, stroke: Stroke) -> Vec<[(f64, f64); 2]> {
    let rows = f64::from(rows.max(1));
    let per_row = (y1 - y0) / rows;
    let dash = per_row * f64::from(stroke.dash.max(1));
    let step = dash + per_row * f64::from(stroke.gap);

    let mut out = Vec::new();
    if !(per_row.is_finite() && per_row > 0.0) {
        return out;
    }
    let mut y = y0;
    while y < y1 {
        let top = (y + dash).min(y1);
        out.push([(x, y), (x, top)]);
        y += step;
    }
    out
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

impl<'a> Widget for PricePlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let rows = area.height;
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Tick labels are drawn by the TUI around the chart rect; plotters
            // only draws the axes here.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(0)
                .y_labels(0)
                .axis_style(&WHITE)
                .draw()?;

            // Markers first so the price line stays on top.
            for marker in self.markers {
                let color = rgb(marker.stroke.color);
                for seg in dashed_segments(marker.x, y0, y1, rows, marker.stroke) {
                    chart.draw_series(LineSeries::new(seg, &color))?;
                }
            }

            if let Some(x) = self.cursor {
                chart.draw_series(LineSeries::new([(x, y0), (x, y1)], &WHITE))?;
            }

            chart.draw_series(LineSeries::new(self.prices.iter().copied(), &rgb(PRICE_LINE)))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
