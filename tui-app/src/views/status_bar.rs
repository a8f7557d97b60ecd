use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

pub fn draw(app: &App, frame: &mut Frame, area: Rect) {
    let count = app.workspace.len();
    let left = match app.status_text() {
        Some(text) => format!(" {}", text),
        None => match count {
            0 => " No documents".to_string(),
            1 => " 1 document".to_string(),
            n => format!(" {} documents", n),
        },
    };

    let position = app
        .workspace
        .active_id()
        .and_then(|id| {
            app.workspace
                .documents()
                .iter()
                .position(|d| d.id() == id)
                .map(|i| format!("{}/{}  ", i + 1, count))
        })
        .unwrap_or_default();
    let right = format!("{}F10 Menu ", position);

    let padding = (area.width as usize)
        .saturating_sub(left.chars().count() + right.chars().count());
    let status = format!("{}{:pad$}{}", left, "", right, pad = padding);

    let para = Paragraph::new(Line::from(vec![Span::styled(
        status,
        Style::default().fg(Color::Black).bg(Color::DarkGray),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
