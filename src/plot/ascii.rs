//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - price samples: `*`
//! - event markers: `|` column
//! - change-point markers: `:` column

use chrono::NaiveDate;

use crate::view::ChartView;

/// Render the filtered view as a fixed-size character grid.
pub fn render_ascii_plot(view: &ChartView, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let Some((x_min, x_max)) = view.x_domain() else {
        return format!("Plot: nothing in range {}\n", view.range);
    };
    let (y_min, y_max) = view.y_domain().unwrap_or((0.0, 1.0));

    let mut grid = vec![vec![' '; width]; height];

    // Markers first so price samples overlay them.
    for marker in view.markers() {
        let x = map_x(marker.date, x_min, x_max, width);
        for row in grid.iter_mut() {
            row[x] = marker.kind.glyph();
        }
    }

    for p in &view.prices {
        let x = map_x(p.date, x_min, x_max, width);
        let y = map_y(p.price, y_min, y_max, height);
        grid[y][x] = '*';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: date=[{x_min}, {x_max}] | price=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn map_x(date: NaiveDate, x_min: NaiveDate, x_max: NaiveDate, width: usize) -> usize {
    let span = (x_max - x_min).num_days();
    if span <= 0 {
        return width / 2;
    }
    let u = ((date - x_min).num_days() as f64 / span as f64).clamp(0.0, 1.0);
    (u * (width - 1) as f64).round() as usize
}

fn map_y(v: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let u = ((v - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    let from_bottom = (u * (height - 1) as f64).round() as usize;
    (height - 1) - from_bottom
}
