use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::menu_model::{self, MenuEntry};
use crate::mode::{Menu, Mode};
use crate::util;

/// Starting column of each menu title in the bar. The dropdown uses the
/// same computation so it lines up with its title.
fn title_offsets() -> Vec<(Menu, u16, u16)> {
    let mut offsets = Vec::with_capacity(Menu::ALL.len());
    let mut x = 0u16;
    for menu in Menu::ALL {
        let width = util::display_width(menu.title()) as u16 + 2;
        offsets.push((menu, x, width));
        x += width;
    }
    offsets
}

pub fn draw(app: &App, frame: &mut Frame, area: Rect) {
    let open = match &app.mode {
        Mode::Menu { menu, .. } => Some(*menu),
        _ => None,
    };

    let mut spans = Vec::new();
    for (menu, _, _) in title_offsets() {
        let label = format!(" {} ", menu.title());
        let style = if open == Some(menu) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
    }

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(para, area);
}

/// Render the open menu as a popup anchored under its bar title.
pub fn draw_dropdown(app: &App, frame: &mut Frame, area: Rect, menu: Menu, selected: usize) {
    let cx = app.menu_context();
    let entries = menu_model::menu_entries(menu, &cx);

    let label_width = entries
        .iter()
        .map(|e| match e {
            MenuEntry::Item { label, .. } | MenuEntry::Toggle { label, .. } => {
                util::display_width(label) + 4
            }
            MenuEntry::Label(text) | MenuEntry::Disabled(text) => util::display_width(text) + 4,
            MenuEntry::Separator => 0,
        })
        .max()
        .unwrap_or(8);
    let shortcut_width = entries
        .iter()
        .map(|e| match e {
            MenuEntry::Item {
                shortcut: Some(s), ..
            }
            | MenuEntry::Toggle {
                shortcut: Some(s), ..
            } => util::display_width(s) + 2,
            _ => 0,
        })
        .max()
        .unwrap_or(0);

    let inner_width = (label_width + shortcut_width).max(16) as u16;
    let height = entries.len() as u16 + 2;

    let anchor_x = title_offsets()
        .iter()
        .find(|(m, _, _)| *m == menu)
        .map(|(_, x, _)| *x)
        .unwrap_or(0);
    let y_offset: u16 = if app.menu_bar_visible() { 1 } else { 0 };
    let popup = Rect::new(
        (area.x + anchor_x).min(area.right().saturating_sub(inner_width + 2)),
        area.y + y_offset,
        (inner_width + 2).min(area.width),
        height.min(area.height.saturating_sub(y_offset)),
    );

    let mut lines = Vec::with_capacity(entries.len());
    let mut selectable = 0usize;
    for entry in &entries {
        let line = match entry {
            MenuEntry::Item {
                label,
                shortcut,
                enabled,
                ..
            } => {
                let current = selectable == selected;
                selectable += 1;
                entry_line(label, shortcut.as_deref(), None, *enabled, current, inner_width)
            }
            MenuEntry::Toggle {
                label,
                shortcut,
                checked,
                enabled,
                ..
            } => {
                let current = selectable == selected;
                selectable += 1;
                entry_line(
                    label,
                    shortcut.as_deref(),
                    Some(*checked),
                    *enabled,
                    current,
                    inner_width,
                )
            }
            MenuEntry::Separator => Line::from(Span::styled(
                "─".repeat(inner_width as usize),
                Style::default().fg(Color::DarkGray),
            )),
            MenuEntry::Label(text) => Line::from(Span::styled(
                format!(" {} ", text),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            MenuEntry::Disabled(text) => Line::from(Span::styled(
                format!("   {}", text),
                Style::default().fg(Color::DarkGray),
            )),
        };
        lines.push(line);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn entry_line(
    label: &str,
    shortcut: Option<&str>,
    checked: Option<bool>,
    enabled: bool,
    current: bool,
    inner_width: u16,
) -> Line<'static> {
    let marker = match checked {
        Some(true) => "[x] ",
        Some(false) => "[ ] ",
        None => "",
    };
    let left = format!(" {}{}", marker, label);
    let right = shortcut.map(|s| format!("{} ", s)).unwrap_or_default();
    let padding = (inner_width as usize)
        .saturating_sub(util::display_width(&left) + util::display_width(&right));
    let text = format!("{}{}{}", left, " ".repeat(padding), right);

    let style = if current {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(Span::styled(text, style))
}
