//! Modal overlays: About, Colophon, Preferences, confirmations, errors,
//! and the path prompt.

use folio_config::ToolButtonStyle;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::mode::{ConfirmKind, Dialog, Mode, PreferenceRow, Prompt, COLOPHON_PAGES};

pub fn draw(app: &App, frame: &mut Frame, area: Rect) {
    match &app.mode {
        Mode::Dialog(Dialog::About) => draw_about(frame, area),
        Mode::Dialog(Dialog::Colophon { page }) => draw_colophon(app, frame, area, *page),
        Mode::Dialog(Dialog::Preferences { row }) => draw_preferences(app, frame, area, *row),
        Mode::Dialog(Dialog::Confirm(kind)) => draw_confirm(frame, area, *kind),
        Mode::Dialog(Dialog::Error { title, text }) => draw_error(frame, area, title, text),
        Mode::Prompt(prompt) => draw_prompt(frame, area, prompt),
        _ => {}
    }
}

fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Black))
}

fn footer_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(Color::DarkGray),
    ))
}

fn body_lines(text: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|l| {
            Line::from(Span::styled(
                format!("  {}", l),
                Style::default().fg(Color::White),
            ))
        })
        .collect()
}

fn about_text() -> String {
    format!(
        "Folio is an open source table editor for the terminal.\n\
         Version {}.\n\
         \n\
         Copyright 2024-2026 The Folio Authors.\n\
         Licensed under the GNU General Public License, version 3.",
        env!("CARGO_PKG_VERSION")
    )
}

fn draw_about(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::default()];
    lines.extend(body_lines(&about_text()));
    lines.push(Line::default());
    lines.push(footer_line("[Enter] Close"));

    let popup = popup_rect(area, 64, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(dialog_block("About Folio"))
            .wrap(Wrap { trim: false }),
        popup,
    );
}

fn colophon_page_text(app: &App, page: usize) -> String {
    match COLOPHON_PAGES[page] {
        "About" => about_text(),
        "Authors" => "Created and developed by the Folio Authors.\n\
                      \n\
                      The document shell follows the conventions of the\n\
                      classic desktop table editors it grew out of."
            .to_string(),
        "Environment" => format!(
            "Operating system   {} ({})\n\
             Application        Folio {}\n\
             Configuration      {}\n\
             Terminal size      {} x {}",
            std::env::consts::OS,
            std::env::consts::ARCH,
            env!("CARGO_PKG_VERSION"),
            app.config_dir().display(),
            app.last_size.0,
            app.last_size.1,
        ),
        _ => "Folio is free software: you can redistribute it and/or\n\
              modify it under the terms of the GNU General Public\n\
              License as published by the Free Software Foundation,\n\
              either version 3 of the License, or (at your option)\n\
              any later version."
            .to_string(),
    }
}

fn draw_colophon(app: &App, frame: &mut Frame, area: Rect, page: usize) {
    // Page tabs
    let mut tab_spans = vec![Span::raw("  ")];
    for (i, name) in COLOPHON_PAGES.iter().enumerate() {
        let style = if i == page {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tab_spans.push(Span::styled(format!(" {} ", name), style));
        tab_spans.push(Span::raw(" "));
    }

    let mut lines = vec![Line::default(), Line::from(tab_spans), Line::default()];
    lines.extend(body_lines(&colophon_page_text(app, page)));
    lines.push(Line::default());
    lines.push(footer_line("[Left/Right] Page   [Enter] Close"));

    let popup = popup_rect(area, 64, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(dialog_block("Colophon")),
        popup,
    );
}

fn style_label(style: ToolButtonStyle) -> &'static str {
    match style {
        ToolButtonStyle::IconOnly => "Icon only",
        ToolButtonStyle::TextOnly => "Text only",
        ToolButtonStyle::TextBesideIcon => "Text beside icon",
        ToolButtonStyle::FollowStyle => "Follow style",
    }
}

fn draw_preferences(app: &App, frame: &mut Frame, area: Rect, selected: usize) {
    let settings = &app.settings;
    let mut lines = vec![Line::default()];

    for (i, row) in PreferenceRow::ALL.iter().enumerate() {
        let value = match row {
            PreferenceRow::ShowPath => checkbox(settings.show_path),
            PreferenceRow::ShowMenuBar => checkbox(settings.show_menu_bar),
            PreferenceRow::ShowStatusBar => checkbox(settings.show_status_bar),
            PreferenceRow::ShowTabBar => checkbox(settings.show_tab_bar),
            PreferenceRow::TabAtBottom => {
                checkbox(settings.tab.position == folio_config::TabPosition::Bottom)
            }
            PreferenceRow::TabAutoHide => checkbox(settings.tab.auto_hide),
            PreferenceRow::ToolButtonStyle => {
                format!("< {} >", style_label(settings.toolbar.button_style))
            }
            PreferenceRow::RecentLimit => format!("< {} >", settings.recent_documents_limit),
        };

        let text = format!("  {:<26} {}", row.label(), value);
        let style = if i == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    lines.push(Line::default());
    lines.push(footer_line("[Space] Toggle   [Left/Right] Adjust   [Esc] Close"));

    let popup = popup_rect(area, 60, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(dialog_block("Preferences")),
        popup,
    );
}

fn checkbox(checked: bool) -> String {
    if checked { "[x]" } else { "[ ]" }.to_string()
}

fn draw_confirm(frame: &mut Frame, area: Rect, kind: ConfirmKind) {
    let mut lines = vec![Line::default()];
    lines.extend(body_lines(kind.text()));
    lines.push(Line::default());
    lines.push(footer_line("[Enter] Yes   [Esc] Cancel"));

    let popup = popup_rect(area, 58, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(dialog_block(kind.title())),
        popup,
    );
}

fn draw_error(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let mut lines = vec![Line::default()];
    lines.extend(body_lines(text));
    lines.push(Line::default());
    lines.push(footer_line("[Enter] Close"));

    let popup = popup_rect(area, 58, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(format!(" {} ", title))
                    .title_style(
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                    )
                    .style(Style::default().bg(Color::Black)),
            )
            .wrap(Wrap { trim: false }),
        popup,
    );
}

fn draw_prompt(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", prompt.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(prompt.input.clone(), Style::default().fg(Color::White)),
            Span::styled("_", Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::default(),
        footer_line("[Enter] Accept   [Esc] Cancel"),
    ];

    let popup = popup_rect(area, 64, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(dialog_block(prompt.title())),
        popup,
    );
}
