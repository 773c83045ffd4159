//! Line-chart view of the per-day statistic series.

use ratatui::{
    layout::Rect,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::themes::Theme;

/// One named series prepared for plotting.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    /// Statistic name shown in the chart legend.
    pub name: String,
    /// `(day, value)` points, one per day.
    pub points: Vec<(f64, f64)>,
}

impl ChartSeries {
    /// Build plot points from a per-day value vector (x = day index).
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self {
            name: name.into(),
            points: values
                .iter()
                .enumerate()
                .map(|(day, v)| (day as f64, *v))
                .collect(),
        }
    }
}

/// Compute `[0, max]` Y bounds covering every point, with a little
/// headroom so the topmost value does not sit on the chart border.
pub fn y_bounds(series: &[ChartSeries]) -> [f64; 2] {
    let max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(_, y)| *y))
        .fold(0.0f64, f64::max);
    if max <= 0.0 {
        [0.0, 1.0]
    } else {
        [0.0, max * 1.1]
    }
}

/// X bounds spanning the longest series' day range.
pub fn x_bounds(series: &[ChartSeries]) -> [f64; 2] {
    let last_day = series
        .iter()
        .map(|s| s.points.len().saturating_sub(1))
        .max()
        .unwrap_or(0);
    [0.0, (last_day.max(1)) as f64]
}

/// Render the series as a bordered line chart into `area`.
pub fn render_chart_view(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &[ChartSeries],
    theme: &Theme,
) {
    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let style = if i % 2 == 0 {
                theme.series
            } else {
                theme.series_alt
            };
            Dataset::default()
                .name(s.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style)
                .data(&s.points)
        })
        .collect();

    let [x_lo, x_hi] = x_bounds(series);
    let [y_lo, y_hi] = y_bounds(series);

    let x_labels = vec![
        format!("{x_lo:.0}"),
        format!("{:.0}", (x_lo + x_hi) / 2.0),
        format!("{x_hi:.0}"),
    ];
    let y_labels = vec![
        format!("{y_lo:.2}"),
        format!("{:.2}", (y_lo + y_hi) / 2.0),
        format!("{y_hi:.2}"),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(title.to_string())
                .title_style(theme.title),
        )
        .x_axis(
            Axis::default()
                .title("day")
                .style(theme.axis)
                .bounds([x_lo, x_hi])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme.axis)
                .bounds([y_lo, y_hi])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_indexes_days() {
        let s = ChartSeries::from_values("std dev", &[0.5, 1.5, 2.5]);
        assert_eq!(s.points, vec![(0.0, 0.5), (1.0, 1.5), (2.0, 2.5)]);
    }

    #[test]
    fn test_y_bounds_headroom() {
        let s = ChartSeries::from_values("s", &[1.0, 2.0]);
        let [lo, hi] = y_bounds(&[s]);
        assert_eq!(lo, 0.0);
        assert!(hi > 2.0);
    }

    #[test]
    fn test_y_bounds_all_zero_series() {
        let s = ChartSeries::from_values("s", &[0.0, 0.0]);
        assert_eq!(y_bounds(&[s]), [0.0, 1.0]);
    }

    #[test]
    fn test_x_bounds_span_longest_series() {
        let a = ChartSeries::from_values("a", &[0.0; 5]);
        let b = ChartSeries::from_values("b", &[0.0; 3]);
        assert_eq!(x_bounds(&[a, b]), [0.0, 4.0]);
    }

    #[test]
    fn test_x_bounds_single_day_stays_plottable() {
        let s = ChartSeries::from_values("s", &[3.0]);
        assert_eq!(x_bounds(&[s]), [0.0, 1.0]);
    }
}
