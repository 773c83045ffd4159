use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Theme definition carrying the styles used by the chart and table
/// views.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Block titles and view headings.
    pub title: Style,
    /// Regular text.
    pub text: Style,
    /// De-emphasised text (hints, footers).
    pub dim: Style,
    /// Axis lines and labels.
    pub axis: Style,
    /// Primary plotted series.
    pub series: Style,
    /// Every other series when several are plotted.
    pub series_alt: Style,
    /// Table header row.
    pub table_header: Style,
    /// Table border.
    pub table_border: Style,
    /// Regular table row.
    pub table_row: Style,
    /// Alternating table row.
    pub table_row_alt: Style,
}

impl Theme {
    /// Dark-background terminal theme.
    pub fn dark() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            axis: Style::default().fg(Color::Gray),
            series: Style::default().fg(Color::Cyan),
            series_alt: Style::default().fg(Color::Magenta),
            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text so that content remains legible
    /// against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            axis: Style::default().fg(Color::DarkGray),
            series: Style::default().fg(Color::Blue),
            series_alt: Style::default().fg(Color::Magenta),
            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
        }
    }

    /// Resolve a theme by name; `"auto"` (or anything unrecognised)
    /// falls back to background detection.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => match detect_background() {
                BackgroundType::Light => Self::light(),
                _ => Self::dark(),
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_dark() {
        let t = Theme::from_name("dark");
        assert_eq!(t.series.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_from_name_light() {
        let t = Theme::from_name("light");
        assert_eq!(t.series.fg, Some(Color::Blue));
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        // Must not panic, whatever the terminal environment looks like.
        let _ = Theme::from_name("solarized");
    }
}
