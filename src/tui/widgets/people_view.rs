use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{leader_and_staff, sorted_history};
use crate::tui::app::App;

pub fn render_people_view(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.people.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No personnel published yet",
            app.theme.muted,
        )));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    // Leader first, then the staff grid, in id order
    let (leader, staff) = leader_and_staff(&app.people);
    let mut row = 0;

    if let Some(leader) = leader {
        let style = if row == app.selected {
            app.theme.selected
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("★ ", app.theme.warning),
            Span::styled(leader.name.clone(), style),
            Span::styled(format!("  {}", leader.role), app.theme.muted),
        ]));
        lines.push(Line::from(""));
        row += 1;
    }

    for person in staff {
        let style = if row == app.selected {
            app.theme.selected
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(person.name.clone(), style),
            Span::styled(format!("  {}", person.role), app.theme.muted),
        ]));
        row += 1;
    }

    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_history_view(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.history.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No history entries published yet",
            app.theme.muted,
        )));
    }

    for (i, entry) in sorted_history(&app.history).into_iter().enumerate() {
        let style = if i == app.selected {
            app.theme.selected
        } else {
            Style::default()
        };
        let year = entry.year.as_deref().unwrap_or("-");
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!("{year:>12}"), app.theme.warning),
            Span::raw("  "),
            Span::styled(entry.name.clone(), style),
        ];
        if let Some(role) = entry.role.as_deref() {
            spans.push(Span::styled(format!("  {role}"), app.theme.muted));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
