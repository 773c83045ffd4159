//! Presentation layer for inflamstat.
//!
//! Renders the named statistic series produced by the analysis pipeline
//! as a terminal chart or per-day table. The core hands its result to
//! [`visualize`] and consumes nothing back.

pub mod app;
pub mod chart_view;
pub mod table_view;
pub mod themes;

pub use app::{App, ViewMode};

use std::collections::BTreeMap;

/// Render `series` in the default chart view with an auto-detected
/// theme, blocking until the user dismisses it.
pub fn visualize(series: &BTreeMap<String, Vec<f64>>) -> std::io::Result<()> {
    App::new("auto", ViewMode::Chart).run(series)
}
