use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, PopupState, Section};
use super::widgets::{
    awards_view::render_awards_view,
    documents_view::render_documents_view,
    help_popup::render_help_popup,
    innovations_view::render_innovations_view,
    news_view::render_news_view,
    overview_view::render_overview_view,
    people_view::{render_history_view, render_people_view},
    search_dialog::render_search_dialog,
    stats_view::render_stats_view,
    status_bar::render_status_bar,
};

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    // Render popup if active
    if let Some(ref popup) = app.popup {
        render_popup(frame, app, popup);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let school = app
        .overview
        .as_ref()
        .map(|o| o.name.clone())
        .unwrap_or_else(|| "schoolbook".to_string());

    let mut spans = vec![
        Span::styled(format!("  {}", school), app.theme.title),
        Span::raw("  "),
        Span::styled(app.section.title(), app.theme.muted),
    ];

    // Show the active search query
    let query = match app.section {
        Section::News => app.news.query(),
        Section::TeacherAwards => app.teacher_awards.query(),
        Section::StudentAwards => app.student_awards.query(),
        Section::SchoolAwards => app.school_awards.query(),
        Section::Documents => app.documents.query(),
        Section::Forms => app.forms.query(),
        _ => None,
    };
    if let Some(query) = query {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[Search: {}]", query),
            app.theme.info,
        ));
        spans.push(Span::styled(" (Esc to clear)", app.theme.muted));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(app.theme.border);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.section {
        Section::Overview => render_overview_view(frame, app, inner),
        Section::News => render_news_view(frame, app, inner),
        Section::TeacherAwards => render_awards_view(frame, app, &app.teacher_awards, inner),
        Section::StudentAwards => render_awards_view(frame, app, &app.student_awards, inner),
        Section::SchoolAwards => render_awards_view(frame, app, &app.school_awards, inner),
        Section::Documents => render_documents_view(frame, app, &app.documents, inner),
        Section::Forms => render_documents_view(frame, app, &app.forms, inner),
        Section::Innovations => render_innovations_view(frame, app, inner),
        Section::People => render_people_view(frame, app, inner),
        Section::History => render_history_view(frame, app, inner),
        Section::Stats => render_stats_view(frame, app, inner),
    }
}

fn render_popup(frame: &mut Frame, app: &App, popup: &PopupState) {
    match popup {
        PopupState::Help => render_help_popup(frame, app),
        PopupState::Search { input, cursor } => {
            render_search_dialog(frame, app, input, *cursor);
        }
    }
}

/// Helper to create a centered rect of fixed size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
