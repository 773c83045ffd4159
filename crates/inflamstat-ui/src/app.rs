//! Application state and terminal event loop.
//!
//! [`App`] owns the theme and view mode and drives a synchronous
//! render/poll loop over a prepared set of named series. The pipeline is
//! batch: all data exists before the view opens, so nothing streams in.

use std::collections::BTreeMap;
use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::chart_view::{self, ChartSeries};
use crate::table_view::{self, TableRowData};
use crate::themes::Theme;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which view the terminal is rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Line chart of each series over days.
    Chart,
    /// Per-day table of each series.
    Table,
}

impl ViewMode {
    /// Parse a view name as accepted on the command line; anything
    /// unrecognised falls back to the chart.
    pub fn from_name(name: &str) -> Self {
        match name {
            "table" => ViewMode::Table,
            _ => ViewMode::Chart,
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the inflamstat terminal views.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current view mode.
    pub view_mode: ViewMode,
}

impl App {
    /// Construct an application with the given theme name and view.
    pub fn new(theme_name: &str, view_mode: ViewMode) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            view_mode,
        }
    }

    /// Render `series` until the user dismisses the view with `q`,
    /// `Esc` or `Ctrl+C`.
    pub fn run(self, series: &BTreeMap<String, Vec<f64>>) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Prepare both view representations up front; the data is fixed
        // for the lifetime of the view.
        let chart_series: Vec<ChartSeries> = series
            .iter()
            .map(|(name, values)| ChartSeries::from_values(name.clone(), values))
            .collect();
        let columns: Vec<String> = series.keys().cloned().collect();
        let named: Vec<(String, Vec<f64>)> = series
            .iter()
            .map(|(name, values)| (name.clone(), values.clone()))
            .collect();
        let rows: Vec<TableRowData> = table_view::rows_from_series(&named);

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame, &chart_series, &columns, &rows))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break Ok(()),
                        _ => {}
                    }
                }
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Render the current view into `frame`.
    fn render(
        &self,
        frame: &mut Frame,
        chart_series: &[ChartSeries],
        columns: &[String],
        rows: &[TableRowData],
    ) {
        let area = frame.area();
        let title = "Inflammation statistics";

        match self.view_mode {
            ViewMode::Chart => {
                if chart_series.is_empty() {
                    table_view::render_no_data(frame, area, &self.theme);
                } else {
                    chart_view::render_chart_view(frame, area, title, chart_series, &self.theme);
                }
            }
            ViewMode::Table => {
                if rows.is_empty() {
                    table_view::render_no_data(frame, area, &self.theme);
                } else {
                    table_view::render_table_view(frame, area, title, columns, rows, &self.theme);
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
