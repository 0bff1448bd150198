use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::models::display_date;
use crate::tui::app::App;

pub fn render_overview_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref overview) = app.overview else {
        let notice = Paragraph::new(Line::from(Span::styled(
            "  No school profile published yet",
            app.theme.muted,
        )));
        frame.render_widget(notice, area);
        return;
    };

    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::raw("  "),
        Span::styled(overview.name.clone(), app.theme.title),
        Span::styled(format!("  {}", overview.name_en), app.theme.muted),
    ])];
    if let Some(age) = overview.age {
        lines.push(Line::from(Span::styled(
            format!("  {age} years of service"),
            app.theme.muted,
        )));
    }
    lines.push(Line::from(""));

    let rows = [
        ("Motto", &overview.motto),
        ("Affiliation", &overview.affiliation),
        ("Address", &overview.address),
        ("School code", &overview.school_code),
        ("SMIS code", &overview.smis_code),
        ("OBEC code", &overview.obec_code),
        ("Vision", &overview.vision),
        ("Mission", &overview.mission),
        ("Philosophy", &overview.philosophy),
        ("Identity", &overview.identity),
        ("Uniqueness", &overview.uniqueness),
    ];
    for (label, value) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<12} "), app.theme.muted),
            Span::raw(value.clone()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<12} ", "Colors"), app.theme.muted),
        Span::raw(format!(
            "{} / {}",
            overview.color_primary, overview.color_secondary
        )),
    ]));
    if let Some(video_id) = overview.video_id.as_deref() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12} ", "Video"), app.theme.muted),
            Span::styled(format!("https://youtu.be/{video_id}"), app.theme.accent),
        ]));
    }

    if app.config.display_home_news && !app.home_news.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  Latest News", app.theme.header)));
        for item in &app.home_news {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(display_date(&item.date), app.theme.info),
                Span::raw(format!("  {}", item.title)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
