use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::listing::FolderSummary;
use crate::tui::theme::TuiTheme;

/// Folder tiles as selectable rows, one per distinct group label.
pub fn folder_lines(
    folders: &[FolderSummary],
    selected: usize,
    theme: &TuiTheme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(folders.len());
    for (i, folder) in folders.iter().enumerate() {
        let marker = if i == selected { "▸ " } else { "  " };
        let label_style = if i == selected {
            theme.selected
        } else {
            theme.accent
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {marker}"), Style::default()),
            Span::styled(folder.label.clone(), label_style),
            Span::styled(format!("  [{} items]", folder.count), theme.muted),
        ]));
    }
    lines
}
