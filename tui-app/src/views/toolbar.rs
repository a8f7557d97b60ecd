use folio_config::{ToolButtonStyle, ToolbarCategory};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

struct Button {
    compact: &'static str,
    full: &'static str,
    needs_document: bool,
}

const fn button(compact: &'static str, full: &'static str) -> Button {
    Button {
        compact,
        full,
        needs_document: false,
    }
}

const fn doc_button(compact: &'static str, full: &'static str) -> Button {
    Button {
        compact,
        full,
        needs_document: true,
    }
}

const APPLICATION_BUTTONS: &[Button] = &[
    button("Abt", "About"),
    button("Prf", "Preferences"),
    button("Qit", "Quit"),
];

const DOCUMENT_BUTTONS: &[Button] = &[
    button("New", "New"),
    button("Opn", "Open"),
    doc_button("Sav", "Save"),
    doc_button("SvA", "Save As"),
    doc_button("Cls", "Close"),
];

const SETTINGS_BUTTONS: &[Button] = &[
    button("Mnu", "Menubar"),
    button("Sts", "Statusbar"),
    button("Ful", "Full Screen"),
];

/// Buttons per toolbar category. The placeholder categories stay empty on
/// purpose; their strips still reserve a slot so the visibility toggles
/// have something to show and hide.
fn buttons(category: ToolbarCategory) -> &'static [Button] {
    match category {
        ToolbarCategory::Application => APPLICATION_BUTTONS,
        ToolbarCategory::Document => DOCUMENT_BUTTONS,
        ToolbarCategory::Settings => SETTINGS_BUTTONS,
        ToolbarCategory::Edit
        | ToolbarCategory::View
        | ToolbarCategory::Format
        | ToolbarCategory::Tools
        | ToolbarCategory::Help => &[],
    }
}

/// A terminal has no icons: "icon only" renders the compact label and the
/// text styles render the full one.
fn button_text(button: &Button, style: ToolButtonStyle) -> &'static str {
    match style {
        ToolButtonStyle::IconOnly => button.compact,
        ToolButtonStyle::TextOnly
        | ToolButtonStyle::TextBesideIcon
        | ToolButtonStyle::FollowStyle => button.full,
    }
}

pub fn draw(app: &App, frame: &mut Frame, area: Rect) {
    let style = app.settings.toolbar.button_style;
    let has_document = app.workspace.has_active_document();

    let mut spans: Vec<Span> = Vec::new();
    let mut first = true;
    for category in ToolbarCategory::ALL {
        if !app.settings.toolbar.visible(category) {
            continue;
        }
        if !first {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        first = false;

        spans.push(Span::styled(
            format!("{}:", category.label()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

        let group = buttons(category);
        if group.is_empty() {
            spans.push(Span::styled(" -", Style::default().fg(Color::DarkGray)));
            continue;
        }
        for b in group {
            let enabled = !b.needs_document || has_document;
            let color = if enabled { Color::White } else { Color::DarkGray };
            spans.push(Span::styled(
                format!(" [{}]", button_text(b, style)),
                Style::default().fg(color),
            ));
        }
    }

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(para, area);
}
