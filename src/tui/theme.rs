use ratatui::style::{Color, Modifier, Style};

use crate::config::{Rgb, ThemeColors};

fn fg(color: Rgb) -> Style {
    Style::default().fg(Color::Rgb(color.r, color.g, color.b))
}

/// TUI theme with ratatui styles
#[derive(Debug, Clone)]
pub struct TuiTheme {
    pub muted: Style,
    pub accent: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
    pub selected: Style,
    pub border: Style,
    pub title: Style,
    pub header: Style,
}

impl From<&ThemeColors> for TuiTheme {
    fn from(colors: &ThemeColors) -> Self {
        Self {
            muted: fg(colors.muted),
            accent: fg(colors.accent),
            success: fg(colors.success),
            warning: fg(colors.warning),
            error: fg(colors.error),
            info: fg(colors.info),
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 70))
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Rgb(80, 80, 100)),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            // Folder and section headers
            header: fg(colors.accent).add_modifier(Modifier::BOLD),
        }
    }
}
