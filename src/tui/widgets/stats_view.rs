use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

use crate::tui::app::App;

pub fn render_stats_view(frame: &mut Frame, app: &App, area: Rect) {
    let summary = &app.enrollment;

    if summary.grades.is_empty() {
        let notice = Paragraph::new(Line::from(Span::styled(
            "  No enrollment figures published yet",
            app.theme.muted,
        )));
        frame.render_widget(notice, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let totals = Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{}", summary.total), app.theme.title),
        Span::styled(" students", app.theme.muted),
        Span::styled("   ", app.theme.muted),
        Span::styled(format!("{}", summary.male), app.theme.accent),
        Span::styled(" male", app.theme.muted),
        Span::styled(" · ", app.theme.muted),
        Span::styled(format!("{}", summary.female), app.theme.info),
        Span::styled(" female", app.theme.muted),
    ]);
    frame.render_widget(Paragraph::new(totals), chunks[0]);

    // Per-grade chart: one group per grade, male and female side by side
    let mut chart = BarChart::default()
        .bar_width(5)
        .bar_gap(1)
        .group_gap(2);
    for grade in &summary.grades {
        let bars = [
            Bar::default()
                .value(u64::from(grade.male))
                .style(app.theme.accent),
            Bar::default()
                .value(u64::from(grade.female))
                .style(app.theme.info),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(grade.grade.clone()))
                .bars(&bars),
        );
    }
    frame.render_widget(chart, chunks[1]);
}
