//! Per-format record loaders.
//!
//! Each loader turns exactly one dataset file into patient-by-day
//! [`Table`]s. Parsing is strict: a malformed file fails the whole load
//! rather than being skipped, since silently dropping patient data would
//! corrupt the downstream statistic.

use std::io::Write;
use std::path::Path;

use inflamstat_core::error::{AnalysisError, Result};
use inflamstat_core::models::{DataFormat, ShapeDefect, Table};
use serde::Deserialize;

// ── RecordLoader ──────────────────────────────────────────────────────────────

/// Capability of parsing one dataset file into tables.
///
/// A CSV file always yields exactly one table; a JSON file yields one
/// table per logical dataset it nests. Either way the output is a flat
/// sequence, never nested.
pub trait RecordLoader {
    /// The standard filename glob for this loader's format.
    fn default_pattern(&self) -> &'static str;

    /// Parse the file at `path` into one or more tables.
    fn parse(&self, path: &Path) -> Result<Vec<Table>>;
}

/// Convert a [`ShapeDefect`] into the error naming the offending file.
fn shape_error(path: &Path, defect: ShapeDefect) -> AnalysisError {
    match defect {
        ShapeDefect::Empty => AnalysisError::EmptyTable {
            path: path.to_path_buf(),
        },
        ShapeDefect::Ragged {
            row,
            expected,
            found,
        } => AnalysisError::RaggedGrid {
            path: path.to_path_buf(),
            row,
            expected,
            found,
        },
    }
}

// ── CsvLoader ─────────────────────────────────────────────────────────────────

/// Loader for flat CSV datasets: one patient per line, comma-separated
/// day readings, no header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLoader;

impl RecordLoader for CsvLoader {
    fn default_pattern(&self) -> &'static str {
        DataFormat::Csv.default_pattern()
    }

    fn parse(&self, path: &Path) -> Result<Vec<Table>> {
        let file = std::fs::File::open(path).map_err(|source| AnalysisError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        // Non-flexible: a ragged row surfaces as a parse error here
        // instead of silently producing a jagged grid.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(std::io::BufReader::new(file));

        let mut rows: Vec<Vec<f64>> = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|source| AnalysisError::CsvParse {
                path: path.to_path_buf(),
                source,
            })?;

            let mut readings = Vec::with_capacity(record.len());
            for token in record.iter() {
                let value: f64 =
                    token
                        .trim()
                        .parse()
                        .map_err(|_| AnalysisError::NumericField {
                            path: path.to_path_buf(),
                            row,
                            token: token.to_string(),
                        })?;
                readings.push(value);
            }
            rows.push(readings);
        }

        let table = Table::from_rows(rows).map_err(|defect| shape_error(path, defect))?;
        Ok(vec![table])
    }
}

// ── JsonLoader ────────────────────────────────────────────────────────────────

/// The two top-level shapes a JSON dataset file may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    /// Several datasets nested in one file.
    Many(Vec<Vec<Vec<f64>>>),
    /// A single patient-by-day grid.
    One(Vec<Vec<f64>>),
}

/// Loader for JSON datasets: either one grid (array of per-patient
/// arrays) or an array of such grids in a single file.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLoader;

impl RecordLoader for JsonLoader {
    fn default_pattern(&self) -> &'static str {
        DataFormat::Json.default_pattern()
    }

    fn parse(&self, path: &Path) -> Result<Vec<Table>> {
        let file = std::fs::File::open(path).map_err(|source| AnalysisError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let document: JsonDocument = serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|source| AnalysisError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?;

        let grids = match document {
            JsonDocument::Many(grids) => grids,
            JsonDocument::One(grid) => vec![grid],
        };

        // A file nesting zero datasets carries no readings at all.
        if grids.is_empty() {
            return Err(AnalysisError::EmptyTable {
                path: path.to_path_buf(),
            });
        }

        grids
            .into_iter()
            .map(|grid| Table::from_rows(grid).map_err(|defect| shape_error(path, defect)))
            .collect()
    }
}

// ── Writers ───────────────────────────────────────────────────────────────────

/// Write `table` as flat CSV, the counterpart of [`CsvLoader`].
///
/// Readings are written with Rust's shortest round-tripping float
/// representation, so a reload reproduces the grid exactly.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|source| AnalysisError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;

    for row in table.rows() {
        let record: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writer
            .write_record(&record)
            .map_err(|source| AnalysisError::CsvParse {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `tables` as a JSON array of grids, the counterpart of
/// [`JsonLoader`].
pub fn write_json(tables: &[Table], path: &Path) -> Result<()> {
    let grids: Vec<&[Vec<f64>]> = tables.iter().map(|t| t.rows()).collect();
    let file = std::fs::File::create(path)?;
    let mut out = std::io::BufWriter::new(file);
    serde_json::to_writer(&mut out, &grids).map_err(|source| AnalysisError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;
    out.flush()?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn table(rows: Vec<Vec<f64>>) -> Table {
        Table::from_rows(rows).unwrap()
    }

    // ── CsvLoader ─────────────────────────────────────────────────────────────

    #[test]
    fn test_csv_parse_basic_grid() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "inflammation-01.csv", "1,2,3\n4,5,6\n");

        let tables = CsvLoader.parse(&path).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].patients(), 2);
        assert_eq!(tables[0].days(), 3);
        assert_eq!(tables[0].rows()[1], vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_csv_parse_fractional_readings() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "inflammation-01.csv", "0.25,1.5\n2.75,0\n");

        let tables = CsvLoader.parse(&path).unwrap();
        assert_eq!(tables[0].rows()[0], vec![0.25, 1.5]);
    }

    #[test]
    fn test_csv_parse_missing_file() {
        let err = CsvLoader
            .parse(Path::new("/tmp/does-not-exist-inflamstat/x.csv"))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::FileRead { .. }));
    }

    #[test]
    fn test_csv_parse_ragged_row_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "bad.csv", "1,2,3\n4,5\n");

        let err = CsvLoader.parse(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::CsvParse { .. }));
    }

    #[test]
    fn test_csv_parse_non_numeric_token_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "bad.csv", "1,2\n3,high\n");

        let err = CsvLoader.parse(&path).unwrap_err();
        match err {
            AnalysisError::NumericField { row, token, .. } => {
                assert_eq!(row, 1);
                assert_eq!(token, "high");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_csv_parse_empty_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "empty.csv", "");

        let err = CsvLoader.parse(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyTable { .. }));
    }

    // ── JsonLoader ────────────────────────────────────────────────────────────

    #[test]
    fn test_json_parse_single_grid() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "inflammation-01.json", "[[1,2],[3,4]]");

        let tables = JsonLoader.parse(&path).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows()[0], vec![1.0, 2.0]);
    }

    #[test]
    fn test_json_parse_nested_grids_flatten() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "inflammation-01.json",
            "[[[1,2],[3,4]],[[5,6],[7,8]]]",
        );

        let tables = JsonLoader.parse(&path).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows()[0], vec![1.0, 2.0]);
        assert_eq!(tables[1].rows()[1], vec![7.0, 8.0]);
    }

    #[test]
    fn test_json_parse_malformed_document_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "bad.json", "{not json");

        let err = JsonLoader.parse(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::JsonParse { .. }));
    }

    #[test]
    fn test_json_parse_non_numeric_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "bad.json", "[[1,\"two\"]]");

        let err = JsonLoader.parse(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::JsonParse { .. }));
    }

    #[test]
    fn test_json_parse_ragged_grid_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "bad.json", "[[1,2],[3]]");

        let err = JsonLoader.parse(&path).unwrap_err();
        match err {
            AnalysisError::RaggedGrid { row, expected, found, .. } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_parse_empty_dataset_list_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "empty.json", "[]");

        let err = JsonLoader.parse(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyTable { .. }));
    }

    #[test]
    fn test_json_parse_missing_file() {
        let err = JsonLoader
            .parse(Path::new("/tmp/does-not-exist-inflamstat/x.json"))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::FileRead { .. }));
    }

    // ── Writers (round trips) ─────────────────────────────────────────────────

    #[test]
    fn test_csv_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let original = table(vec![vec![0.0, 1.25, 2.0], vec![3.5, 4.0, 5.75]]);

        write_csv(&original, &path).unwrap();
        let reloaded = CsvLoader.parse(&path).unwrap();

        assert_eq!(reloaded, vec![original]);
    }

    #[test]
    fn test_json_round_trip_multiple_tables() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let a = table(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = table(vec![vec![5.0, 6.0]]);

        write_json(&[a.clone(), b.clone()], &path).unwrap();
        let reloaded = JsonLoader.parse(&path).unwrap();

        assert_eq!(reloaded, vec![a, b]);
    }

    // ── Default patterns ──────────────────────────────────────────────────────

    #[test]
    fn test_loader_default_patterns() {
        assert_eq!(CsvLoader.default_pattern(), "inflammation*.csv");
        assert_eq!(JsonLoader.default_pattern(), "inflammation*.json");
    }
}
