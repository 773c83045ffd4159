use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the inflammation analysis pipeline.
///
/// Loading is fail-fast: the first error raised for any file aborts the
/// whole run, and nothing is caught or downgraded below the top-level
/// caller.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A dataset file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV dataset could not be parsed into records.
    #[error("Failed to parse CSV file {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A JSON dataset could not be parsed into a numeric grid.
    #[error("Failed to parse JSON file {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A reading in a CSV record is not a number.
    #[error("Non-numeric reading {token:?} in {path} (patient row {row})")]
    NumericField {
        path: PathBuf,
        row: usize,
        token: String,
    },

    /// A parsed grid has rows of differing lengths.
    #[error("Ragged grid in {path}: patient row {row} has {found} readings, expected {expected}")]
    RaggedGrid {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A parsed grid contains no readings at all.
    #[error("Empty dataset in {path}")]
    EmptyTable { path: PathBuf },

    /// The filename pattern is not valid glob syntax.
    #[error("Invalid filename pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// No dataset files matched the pattern inside the directory.
    #[error("No data files matching {pattern:?} found in {dir}")]
    NoDataFiles { dir: PathBuf, pattern: String },

    /// Tables with differing day counts cannot be stacked.
    #[error("Day-count mismatch: table {table} has {found} days, expected {expected}")]
    ShapeMismatch {
        table: usize,
        expected: usize,
        found: usize,
    },

    /// Analysis was invoked with an empty table sequence.
    #[error("No tables to analyse")]
    NoTables,

    /// Pass-through for raw I/O errors that do not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the inflamstat crates.
pub type Result<T> = std::result::Result<T, AnalysisError>;
