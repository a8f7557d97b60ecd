use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::util;

const MAX_TAB_WIDTH: usize = 24;

pub fn draw(app: &App, frame: &mut Frame, area: Rect) {
    let active = app.workspace.active_id();

    let mut spans = Vec::new();
    for document in app.workspace.documents() {
        // Tab captions always use the short form; the full path belongs to
        // the window title.
        let caption = util::truncate_display(&document.display_title(false), MAX_TAB_WIDTH);
        let label = format!(" {} ", caption);
        if Some(document.id()) == active {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                label,
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            ));
        }
        spans.push(Span::styled(" ", Style::default().bg(Color::Black)));
    }

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(para, area);
}
