//! Main analysis pipeline.
//!
//! Orchestrates loading a study directory and computing the per-day
//! standard deviation of each dataset's daily means, returning an
//! [`AnalysisResult`] ready for the presenter.

use std::collections::BTreeMap;

use chrono::Utc;
use inflamstat_core::error::{AnalysisError, Result};
use inflamstat_core::models::Table;
use inflamstat_core::stats;
use tracing::info;

use crate::loader::RecordLoader;
use crate::source::DataSource;

// ── Public types ──────────────────────────────────────────────────────────────

/// Series key under which the run's output statistic is published.
pub const STD_DEV_BY_DAY: &str = "standard deviation by day";

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of tables loaded (≥ the number of files when JSON files
    /// nest several datasets).
    pub tables_loaded: usize,
    /// Total patient rows across all tables.
    pub patients_total: usize,
    /// Shared day count of every table in the run.
    pub day_count: usize,
    /// Wall-clock seconds spent discovering and parsing dataset files.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent computing the statistic.
    pub analyse_time_seconds: f64,
}

/// The complete output of [`analyse_data`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalysisResult {
    /// Named series for the presenter, keyed by statistic name.
    pub series: BTreeMap<String, Vec<f64>>,
    /// Metadata about this analysis run.
    pub metadata: AnalysisMetadata,
}

// ── Aggregation ───────────────────────────────────────────────────────────────

/// Turn a sequence of tables into the named-series mapping for the
/// presenter.
///
/// 1. Per table, compute the daily mean vector (mean over patients,
///    per day).
/// 2. Stack the vectors row-wise into the means matrix
///    (rows = tables, columns = days).
/// 3. Compute the per-day **population** standard deviation down each
///    column (see [`stats::column_std_dev`] for the divisor contract).
///
/// Tables must be non-empty and share one day count; a mismatch fails
/// with [`AnalysisError::ShapeMismatch`] naming the first offending
/// table rather than silently truncating or padding.
pub fn analyse(tables: &[Table]) -> Result<BTreeMap<String, Vec<f64>>> {
    let first = tables.first().ok_or(AnalysisError::NoTables)?;
    let day_count = first.days();
    for (index, table) in tables.iter().enumerate().skip(1) {
        if table.days() != day_count {
            return Err(AnalysisError::ShapeMismatch {
                table: index,
                expected: day_count,
                found: table.days(),
            });
        }
    }

    let means_matrix: Vec<Vec<f64>> = tables.iter().map(stats::daily_mean).collect();
    let deviation = stats::column_std_dev(&means_matrix);

    let mut series = BTreeMap::new();
    series.insert(STD_DEV_BY_DAY.to_string(), deviation);
    Ok(series)
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Run the full analysis pipeline over a data source.
///
/// 1. Load all matching dataset files into tables.
/// 2. Compute the std-dev-by-day series via [`analyse`].
/// 3. Attach run metadata.
///
/// Any failure aborts the run with the propagated error; nothing
/// downstream is invoked on failure.
pub fn analyse_data<L: RecordLoader>(source: &DataSource<L>) -> Result<AnalysisResult> {
    // ── Step 1: Load tables ───────────────────────────────────────────────────
    let load_start = std::time::Instant::now();
    let tables = source.load()?;
    let load_time = load_start.elapsed().as_secs_f64();

    // ── Step 2: Aggregate ─────────────────────────────────────────────────────
    let analyse_start = std::time::Instant::now();
    let series = analyse(&tables)?;
    let analyse_time = analyse_start.elapsed().as_secs_f64();

    // ── Step 3: Build result ──────────────────────────────────────────────────
    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        tables_loaded: tables.len(),
        patients_total: tables.iter().map(Table::patients).sum(),
        day_count: tables[0].days(),
        load_time_seconds: load_time,
        analyse_time_seconds: analyse_time,
    };

    info!(
        "Analysed {} table(s) covering {} day(s) from {}",
        metadata.tables_loaded,
        metadata.day_count,
        source.data_dir().display()
    );

    Ok(AnalysisResult { series, metadata })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
