use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Section, StatusKind};

pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    // Status message or item counts
    if let Some(ref msg) = app.status_message {
        let style = match msg.kind {
            StatusKind::Success => app.theme.success,
            StatusKind::Error => app.theme.error,
            StatusKind::Info => app.theme.info,
        };
        let line = Line::from(vec![Span::raw("  "), Span::styled(&msg.text, style)]);
        frame.render_widget(Paragraph::new(line), chunks[0]);
    } else if app.config.display_item_counts {
        let count = retained_count(app);
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{count}"), app.theme.success),
            Span::styled(" items", app.theme.muted),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[0]);
    }

    // Keybindings line
    let mut keybindings = vec![("?", "Help"), ("Tab", "Section")];
    if matches!(
        app.section,
        Section::TeacherAwards
            | Section::StudentAwards
            | Section::SchoolAwards
            | Section::Documents
            | Section::Forms
    ) {
        keybindings.push(("Enter", "Open"));
        keybindings.push(("Esc", "Back"));
    }
    if app.section.searchable() {
        keybindings.push(("/", "Search"));
        keybindings.push(("h/l", "Page"));
    }
    keybindings.push(("y", "Copy link"));
    keybindings.push(("q", "Quit"));

    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for (i, (key, desc)) in keybindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", app.theme.muted));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            app.theme.muted.add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", desc), app.theme.muted));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

fn retained_count(app: &App) -> usize {
    match app.section {
        Section::Overview => usize::from(app.overview.is_some()),
        Section::News => app.news.items().len(),
        Section::TeacherAwards => app.teacher_awards.items().len(),
        Section::StudentAwards => app.student_awards.items().len(),
        Section::SchoolAwards => app.school_awards.items().len(),
        Section::Documents => app.documents.items().len(),
        Section::Forms => app.forms.items().len(),
        Section::Innovations => app.innovations.len(),
        Section::People => app.people.len(),
        Section::History => app.history.len(),
        Section::Stats => app.enrollment.grades.len(),
    }
}
