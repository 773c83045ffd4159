//! Dataset discovery and loading.
//!
//! A [`DataSource`] pairs a study directory with a filename glob pattern
//! and a [`RecordLoader`], replacing ad-hoc module-level file discovery
//! with an explicit value constructed once and passed around.

use std::path::{Path, PathBuf};

use glob::Pattern;
use inflamstat_core::error::{AnalysisError, Result};
use inflamstat_core::models::Table;
use tracing::debug;

use crate::loader::{CsvLoader, JsonLoader, RecordLoader};

// ── Discovery ─────────────────────────────────────────────────────────────────

/// Find all files directly inside `data_dir` whose name matches the glob
/// `pattern`, sorted by path.
///
/// A nonexistent directory naturally yields zero matches; the caller
/// decides whether that is an error.
pub fn find_matching_files(data_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|source| AnalysisError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map(|name| matcher.matches(name))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    Ok(files)
}

// ── DataSource ────────────────────────────────────────────────────────────────

/// A study directory plus the filename pattern selecting its dataset
/// files.
///
/// Immutable once constructed; owns no tables, only produces them on
/// demand via [`DataSource::load`].
#[derive(Debug, Clone)]
pub struct DataSource<L: RecordLoader> {
    data_dir: PathBuf,
    pattern: String,
    loader: L,
}

impl DataSource<CsvLoader> {
    /// Data source over flat CSV datasets in `data_dir`.
    pub fn csv(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_loader(data_dir, CsvLoader)
    }
}

impl DataSource<JsonLoader> {
    /// Data source over (possibly nested) JSON datasets in `data_dir`.
    pub fn json(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_loader(data_dir, JsonLoader)
    }
}

impl<L: RecordLoader> DataSource<L> {
    /// Data source with an explicit loader, using the loader's default
    /// filename pattern.
    pub fn with_loader(data_dir: impl Into<PathBuf>, loader: L) -> Self {
        let pattern = loader.default_pattern().to_string();
        Self {
            data_dir: data_dir.into(),
            pattern,
            loader,
        }
    }

    /// Replace the filename pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// The study directory this source reads from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The filename glob pattern in effect.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Load every matching dataset file into a flat, ordered sequence of
    /// tables.
    ///
    /// Files are loaded sequentially in sorted name order; a file that
    /// nests several datasets contributes them individually, in place.
    /// Fail-fast: the first loader error aborts the whole load with no
    /// partial result, and zero matches is a hard error rather than an
    /// empty sequence.
    pub fn load(&self) -> Result<Vec<Table>> {
        let files = find_matching_files(&self.data_dir, &self.pattern)?;
        if files.is_empty() {
            return Err(AnalysisError::NoDataFiles {
                dir: self.data_dir.clone(),
                pattern: self.pattern.clone(),
            });
        }

        let mut tables = Vec::with_capacity(files.len());
        for path in &files {
            let parsed = self.loader.parse(path)?;
            debug!("Loaded {} table(s) from {}", parsed.len(), path.display());
            tables.extend(parsed);
        }
        Ok(tables)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
