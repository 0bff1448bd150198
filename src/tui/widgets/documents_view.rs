use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::listing::{FolderList, ListSnapshot};
use crate::models::{display_date, Document};
use crate::tui::app::App;

use super::folder_grid::folder_lines;
use super::pagination::controls_line;

pub fn render_documents_view(
    frame: &mut Frame,
    app: &App,
    list: &FolderList<Document>,
    area: Rect,
) {
    let mut lines: Vec<Line> = Vec::new();

    match list.snapshot() {
        ListSnapshot::Folders(folders) => {
            if folders.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  No documents published yet",
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
                Span::styled(format!("  [{total} files]"), app.theme.muted),
            ]));
            lines.push(Line::from(""));

            for (i, doc) in items.iter().enumerate() {
                let style = if i == app.selected {
                    app.theme.selected
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(display_date(&doc.upload_date), app.theme.info),
                    Span::raw("  "),
                    Span::styled(doc.title.clone(), style),
                ]));
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
