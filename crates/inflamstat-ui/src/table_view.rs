//! Per-day table view of the statistic series.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per day
//! and one column per named series.

use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::themes::Theme;

/// Data for a single row in the per-day table.
#[derive(Debug, Clone)]
pub struct TableRowData {
    /// Day index (0-based).
    pub day: usize,
    /// One value per series, in column order.
    pub values: Vec<f64>,
}

/// Build per-day rows from parallel series value vectors.
///
/// `series` holds one `(name, values)` pair per column; rows cover the
/// longest vector, missing values render blank.
pub fn rows_from_series(series: &[(String, Vec<f64>)]) -> Vec<TableRowData> {
    let days = series.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
    (0..days)
        .map(|day| TableRowData {
            day,
            values: series
                .iter()
                .map(|(_, v)| v.get(day).copied().unwrap_or(f64::NAN))
                .collect(),
        })
        .collect()
}

/// Render the per-day statistics table into `area`.
pub fn render_table_view(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    columns: &[String],
    rows: &[TableRowData],
    theme: &Theme,
) {
    let header_cells = std::iter::once("Day".to_string())
        .chain(columns.iter().cloned())
        .map(|h| Cell::from(h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            let cells = std::iter::once(Cell::from(row.day.to_string())).chain(
                row.values.iter().map(|v| {
                    if v.is_nan() {
                        Cell::from("")
                    } else {
                        Cell::from(format!("{v:.4}"))
                    }
                }),
            );
            Row::new(cells).style(style)
        })
        .collect();

    let mut widths = vec![Constraint::Length(6)];
    widths.extend(columns.iter().map(|_| Constraint::Min(12)));

    let table = Table::new(data_rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(title.to_string())
            .title_style(theme.title),
    );

    frame.render_widget(table, area);
}

/// Render a placeholder when there is nothing to show.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let message = Paragraph::new("No statistics to display")
        .style(theme.dim)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
