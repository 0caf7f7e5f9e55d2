//! Terminal plotting for the non-interactive report.

pub mod ascii;

pub use ascii::render_ascii_plot;
