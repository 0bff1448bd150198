use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::display_date;
use crate::tui::app::App;

use super::pagination::controls_line;

pub fn render_news_view(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.news.snapshot();
    let mut lines: Vec<Line> = Vec::new();

    if app.news.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No news published yet",
            app.theme.muted,
        )));
    } else if snapshot.total == 0 {
        lines.push(Line::from(Span::styled(
            "  No matching news",
            app.theme.muted,
        )));
    } else {
        for (i, item) in snapshot.items.iter().enumerate() {
            let style = if i == app.selected {
                app.theme.selected
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(display_date(&item.date), app.theme.info),
                Span::raw("  "),
                Span::styled(item.title.clone(), style),
            ]));
        }

        if !snapshot.controls.is_empty() {
            lines.push(Line::from(""));
            lines.push(controls_line(&snapshot.controls, snapshot.page, &app.theme));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
