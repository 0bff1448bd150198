use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::listing::{FolderList, ListSnapshot};
use crate::models::Achievement;
use crate::tui::app::App;

use super::folder_grid::folder_lines;
use super::pagination::controls_line;

pub fn render_awards_view(
    frame: &mut Frame,
    app: &App,
    list: &FolderList<Achievement>,
    area: Rect,
) {
    let mut lines: Vec<Line> = Vec::new();

    match list.snapshot() {
        ListSnapshot::Folders(folders) => {
            if folders.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  No achievements published yet",
                    app.theme.muted,
                )));
            } else {
                lines.extend(folder_lines(&folders, app.selected, &app.theme));
            }
        }
        ListSnapshot::Details {
            group,
            items,
            page,
            total,
            controls,
        } => {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(group.to_string(), app.theme.header),
                Span::styled(format!("  [{total} items]"), app.theme.muted),
            ]));
            lines.push(Line::from(""));

            for (i, item) in items.iter().enumerate() {
                let style = if i == app.selected {
                    app.theme.selected
                } else {
                    Style::default()
                };
                let title = item.title.as_deref().unwrap_or("-");
                let mut spans = vec![
                    Span::raw("  "),
                    Span::styled(item.honoree().to_string(), style),
                    Span::styled(format!("  {title}"), app.theme.muted),
                ];
                if let Some(program) = item.program.as_deref() {
                    spans.push(Span::styled(format!(" · {program}"), app.theme.muted));
                }
                lines.push(Line::from(spans));
            }
            if items.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  Nothing on this page",
                    app.theme.muted,
                )));
            }

            if !controls.is_empty() {
                lines.push(Line::from(""));
                lines.push(controls_line(&controls, page, &app.theme));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
