use ratatui::text::{Line, Span};

use crate::listing::PageControl;
use crate::tui::theme::TuiTheme;

/// One-line pagination bar: the current page bracketed, the rest dimmed.
pub fn controls_line(controls: &[PageControl], current: usize, theme: &TuiTheme) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, control) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        match control {
            PageControl::Page(p) if *p == current => {
                spans.push(Span::styled(format!("[{p}]"), theme.warning))
            }
            PageControl::Page(p) => spans.push(Span::styled(p.to_string(), theme.muted)),
            PageControl::Ellipsis => spans.push(Span::styled("…", theme.muted)),
        }
    }
    Line::from(spans)
}
