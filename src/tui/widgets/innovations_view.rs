use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

pub fn render_innovations_view(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.innovations.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No innovations published yet",
            app.theme.muted,
        )));
    }

    for (i, inno) in app.innovations.iter().enumerate() {
        let style = if i == app.selected {
            app.theme.selected
        } else {
            Style::default()
        };
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(inno.title.clone(), style),
            Span::styled(format!(" [{}]", inno.subject_badge()), app.theme.info),
            Span::styled(format!("  {}", inno.creator), app.theme.muted),
        ];
        if let Some(class) = inno.class.as_deref() {
            spans.push(Span::styled(format!(" · {class}"), app.theme.muted));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
