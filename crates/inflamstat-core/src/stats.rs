use crate::models::Table;

// ── Per-table statistics ──────────────────────────────────────────────────────

/// Per-day arithmetic mean across a table's patients.
///
/// The returned vector has one value per day. Division by zero cannot
/// occur: [`Table`] guarantees at least one patient row.
pub fn daily_mean(table: &Table) -> Vec<f64> {
    column_mean(table.rows())
}

/// Per-day maximum reading across a table's patients.
pub fn daily_max(table: &Table) -> Vec<f64> {
    fold_columns(table.rows(), f64::NEG_INFINITY, f64::max)
}

/// Per-day minimum reading across a table's patients.
pub fn daily_min(table: &Table) -> Vec<f64> {
    fold_columns(table.rows(), f64::INFINITY, f64::min)
}

// ── Column-wise kernels ───────────────────────────────────────────────────────

/// Column-wise arithmetic mean of a non-empty, non-ragged matrix.
pub fn column_mean(rows: &[Vec<f64>]) -> Vec<f64> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    let n = rows.len() as f64;
    (0..first.len())
        .map(|day| rows.iter().map(|row| row[day]).sum::<f64>() / n)
        .collect()
}

/// Column-wise **population** standard deviation (divisor N) of a
/// non-empty, non-ragged matrix.
///
/// This matches NumPy's `np.std` default (`ddof=0`): a matrix with a
/// single row yields the zero vector, never NaN.
pub fn column_std_dev(rows: &[Vec<f64>]) -> Vec<f64> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    let n = rows.len() as f64;
    let means = column_mean(rows);
    (0..first.len())
        .map(|day| {
            let sum_sq: f64 = rows
                .iter()
                .map(|row| {
                    let diff = row[day] - means[day];
                    diff * diff
                })
                .sum();
            (sum_sq / n).sqrt()
        })
        .collect()
}

/// Fold each column of the matrix with `f`, starting from `init`.
fn fold_columns(rows: &[Vec<f64>], init: f64, f: fn(f64, f64) -> f64) -> Vec<f64> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    (0..first.len())
        .map(|day| rows.iter().map(|row| row[day]).fold(init, f))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<f64>>) -> Table {
        Table::from_rows(rows).unwrap()
    }

    fn assert_vec_eq(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "length mismatch");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < 1e-9, "index {i}: {a} != {e}");
        }
    }

    // ── daily_mean ────────────────────────────────────────────────────────────

    #[test]
    fn test_daily_mean_integers() {
        let t = table(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_vec_eq(&daily_mean(&t), &[3.0, 4.0]);
    }

    #[test]
    fn test_daily_mean_zeros() {
        let t = table(vec![vec![0.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]]);
        assert_vec_eq(&daily_mean(&t), &[0.0, 0.0]);
    }

    #[test]
    fn test_daily_mean_identical_rows_equals_any_row() {
        // Mean of identical values is that value.
        let row = vec![2.5, 0.0, 7.25, 1.0];
        let t = table(vec![row.clone(), row.clone(), row.clone()]);
        assert_vec_eq(&daily_mean(&t), &row);
    }

    #[test]
    fn test_daily_mean_single_patient() {
        let t = table(vec![vec![4.0, 5.0, 6.0]]);
        assert_vec_eq(&daily_mean(&t), &[4.0, 5.0, 6.0]);
    }

    // ── daily_max / daily_min ─────────────────────────────────────────────────

    #[test]
    fn test_daily_max() {
        let t = table(vec![vec![4.0, 2.0, 5.0], vec![1.0, 6.0, 2.0], vec![4.0, 1.0, 9.0]]);
        assert_vec_eq(&daily_max(&t), &[4.0, 6.0, 9.0]);
    }

    #[test]
    fn test_daily_min() {
        let t = table(vec![vec![4.0, 2.0, 5.0], vec![1.0, 6.0, 2.0], vec![4.0, 1.0, 9.0]]);
        assert_vec_eq(&daily_min(&t), &[1.0, 1.0, 2.0]);
    }

    // ── column_std_dev ────────────────────────────────────────────────────────

    #[test]
    fn test_std_dev_population_divisor() {
        // Population std of [2, 6] per column: mean 4, deviations ±2 → 2.0.
        let rows = vec![vec![2.0, 3.0], vec![6.0, 7.0]];
        assert_vec_eq(&column_std_dev(&rows), &[2.0, 2.0]);
    }

    #[test]
    fn test_std_dev_identical_rows_is_zero_vector() {
        let rows = vec![vec![1.5, 2.5], vec![1.5, 2.5], vec![1.5, 2.5]];
        assert_vec_eq(&column_std_dev(&rows), &[0.0, 0.0]);
    }

    #[test]
    fn test_std_dev_single_row_is_zero_not_nan() {
        // ddof=0: one observation has zero spread.
        let rows = vec![vec![3.0, 9.0, 27.0]];
        assert_vec_eq(&column_std_dev(&rows), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_std_dev_three_rows() {
        // Column [1, 2, 3]: mean 2, variance 2/3, std ≈ 0.816496580927726.
        let rows = vec![vec![1.0], vec![2.0], vec![3.0]];
        assert_vec_eq(&column_std_dev(&rows), &[(2.0f64 / 3.0).sqrt()]);
    }

    #[test]
    fn test_column_mean_empty_matrix() {
        assert!(column_mean(&[]).is_empty());
        assert!(column_std_dev(&[]).is_empty());
    }
}
