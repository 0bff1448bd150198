use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::ui::centered_rect;

pub fn render_help_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(46, 18, frame.area());

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border)
        .style(Style::default().bg(ratatui::style::Color::Black));

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let entries = [
        ("Tab / Shift-Tab", "Next / previous section"),
        ("1-9, 0, s", "Jump to a section"),
        ("j / k", "Move selection"),
        ("g / G", "First / last row"),
        ("Enter", "Open the selected folder"),
        ("Esc", "Back (or quit at top level)"),
        ("h / l", "Previous / next page"),
        ("/", "Search this section"),
        ("y", "Copy the selected link"),
        ("r", "Reload content"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{key:<16}"),
                app.theme.muted.add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        app.theme.muted,
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
