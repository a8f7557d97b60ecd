use folio_core::caption;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// The document surface. Table content is out of scope, so this renders
/// the document's identity instead of cells.
pub fn draw(app: &App, frame: &mut Frame, area: Rect) {
    let Some(document) = app.workspace.active_document() else {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "  No open documents",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "  Ctrl+N creates a new sheet, Ctrl+O opens one.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    };

    let title = format!(" {} ", document.display_title(app.settings.show_path));
    let location = match document.path() {
        Some(path) => caption::abbreviate_home(path),
        None => "(not saved yet)".to_string(),
    };

    let value_style = Style::default().fg(Color::White);
    let key_style = Style::default().fg(Color::Cyan);
    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("  Location  ", key_style),
            Span::styled(location, value_style),
        ]),
        Line::from(vec![
            Span::styled("  Size      ", key_style),
            Span::styled(format!("{} bytes", document.contents().len()), value_style),
        ]),
        Line::from(vec![
            Span::styled("  Modified  ", key_style),
            Span::styled(
                if document.modified() { "yes" } else { "no" },
                value_style,
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "  The table surface is not part of this shell.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
