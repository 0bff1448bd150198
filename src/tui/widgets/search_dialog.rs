use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::ui::centered_rect;

pub fn render_search_dialog(frame: &mut Frame, app: &App, input: &str, cursor: usize) {
    let area = centered_rect(46, 5, frame.area());

    let block = Block::default()
        .title(format!(" Search {} ", app.section.title()))
        .borders(Borders::ALL)
        .border_style(app.theme.border)
        .style(Style::default().bg(ratatui::style::Color::Black));

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let chars: Vec<char> = input.chars().collect();
    let before: String = chars.iter().take(cursor).collect();
    let at: String = chars
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = chars.iter().skip(cursor + 1).collect();

    let lines = vec![
        Line::from(vec![
            Span::raw("  "),
            Span::raw(before),
            Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter to search · Esc to cancel",
            app.theme.muted,
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
