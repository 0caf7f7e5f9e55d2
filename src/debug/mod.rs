//! Debug bundle writer for inspecting the fetched data and the current view.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::dashboard::Dashboard;
use crate::data::Dataset;
use crate::error::AppError;
use crate::view::ChartView;

/// Write a markdown snapshot of `dashboard` under `dir` and return its path.
pub fn write_debug_bundle(dashboard: &Dashboard, dir: &Path) -> Result<PathBuf, AppError> {
    create_dir_all(dir).map_err(|e| AppError::new(4, format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("brent_debug_{ts}_r{}.md", dashboard.revision()));

    let view = dashboard.view();
    let body = render_bundle(dashboard, &view, &Local::now().to_rfc3339());

    let mut file = File::create(&path)
        .map_err(|e| AppError::new(4, format!("Failed to create debug file: {e}")))?;
    file.write_all(body.as_bytes())
        .map_err(|e| AppError::new(4, format!("Failed to write debug bundle: {e}")))?;

    log::info!("Wrote debug bundle {}", path.display());
    Ok(path)
}

fn render_bundle(dashboard: &Dashboard, view: &ChartView, generated: &str) -> String {
    let store = dashboard.store();
    let mut out = String::new();

    out.push_str("# brent debug bundle\n");
    out.push_str(&format!("- generated: {generated}\n"));
    out.push_str(&format!("- revision: {}\n", dashboard.revision()));
    out.push_str(&format!("- range: {}\n", view.range));
    let selected: Vec<&str> = dashboard.filter().selected().iter().collect();
    out.push_str(&format!("- selected: [{}]\n", selected.join(", ")));

    out.push_str("\n## Datasets\n");
    out.push_str("| dataset | fetched | in view | pending |\n");
    out.push_str("| - | - | - | - |\n");
    for dataset in Dataset::ALL {
        let (fetched, shown) = match dataset {
            Dataset::Prices => (store.prices().len(), view.prices.len()),
            Dataset::Events => (store.events().len(), view.events.len()),
            Dataset::ChangePoints => (store.change_points().len(), view.change_points.len()),
        };
        let pending = dashboard.pending().contains(&dataset);
        out.push_str(&format!("| {dataset} | {fetched} | {shown} | {pending} |\n"));
    }

    out.push_str("\n## Markers\n");
    out.push_str("| kind | date | label |\n");
    out.push_str("| - | - | - |\n");
    for m in view.markers() {
        out.push_str(&format!("| {:?} | {} | {} |\n", m.kind, m.date, m.label));
    }

    out.push_str("\n## Prices in view\n");
    out.push_str("| date | price |\n");
    out.push_str("| - | - |\n");
    for p in &view.prices {
        out.push_str(&format!("| {} | {:.2} |\n", p.date, p.price));
    }

    out
}
