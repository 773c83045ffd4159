/// Which on-disk dataset format a study directory uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// Flat comma-separated numeric text, one patient per line.
    Csv,
    /// JSON array-of-arrays, optionally nesting several datasets per file.
    Json,
}

impl DataFormat {
    /// Parse a format name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(DataFormat::Csv),
            "json" => Some(DataFormat::Json),
            _ => None,
        }
    }

    /// The standard filename glob for this format's dataset files.
    pub fn default_pattern(&self) -> &'static str {
        match self {
            DataFormat::Csv => "inflammation*.csv",
            DataFormat::Json => "inflammation*.json",
        }
    }
}

// ── Table ─────────────────────────────────────────────────────────────────────

/// Why a raw grid was rejected by [`Table::from_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeDefect {
    /// The grid has no rows, or its first row has no readings.
    Empty,
    /// Row `row` has `found` readings where the first row has `expected`.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// One dataset file's parsed patient-by-day numeric grid.
///
/// Rows are indexed by patient (0..P-1), columns by day (0..D-1).
/// Construction guarantees at least one patient, at least one day, and
/// a uniform day count across rows, so the statistics kernels never see
/// a ragged or empty grid. A table is never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Vec<f64>>,
}

impl Table {
    /// Validate a raw grid and wrap it.
    ///
    /// Loaders convert the returned [`ShapeDefect`] into an error
    /// carrying the offending file's path.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> std::result::Result<Self, ShapeDefect> {
        let Some(first) = rows.first() else {
            return Err(ShapeDefect::Empty);
        };
        let expected = first.len();
        if expected == 0 {
            return Err(ShapeDefect::Empty);
        }
        for (row, readings) in rows.iter().enumerate().skip(1) {
            if readings.len() != expected {
                return Err(ShapeDefect::Ragged {
                    row,
                    expected,
                    found: readings.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Number of patients (rows).
    pub fn patients(&self) -> usize {
        self.rows.len()
    }

    /// Number of days (columns).
    pub fn days(&self) -> usize {
        self.rows[0].len()
    }

    /// All patient rows, in file order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
