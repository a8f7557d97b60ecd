//! Frame layout: chrome rows around the table surface, overlays on top.

pub mod dialogs;
pub mod menu_bar;
pub mod status_bar;
pub mod tab_bar;
pub mod table_view;
pub mod toolbar;

use folio_config::TabPosition;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::App;
use crate::mode::Mode;

pub fn draw(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let menu = app.menu_bar_visible();
    let tool = app.toolbar_visible();
    let tabs = app.tab_bar_visible();
    let status = app.status_bar_visible();
    let tabs_on_top = app.settings.tab.position == TabPosition::Top;

    let mut constraints = Vec::new();
    if menu {
        constraints.push(Constraint::Length(1));
    }
    if tool {
        constraints.push(Constraint::Length(1));
    }
    if tabs && tabs_on_top {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(3));
    if tabs && !tabs_on_top {
        constraints.push(Constraint::Length(1));
    }
    if status {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::vertical(constraints).split(area);
    let mut slots = chunks.iter().copied();

    if menu {
        menu_bar::draw(app, frame, slots.next().unwrap());
    }
    if tool {
        toolbar::draw(app, frame, slots.next().unwrap());
    }
    if tabs && tabs_on_top {
        tab_bar::draw(app, frame, slots.next().unwrap());
    }
    table_view::draw(app, frame, slots.next().unwrap());
    if tabs && !tabs_on_top {
        tab_bar::draw(app, frame, slots.next().unwrap());
    }
    if status {
        status_bar::draw(app, frame, slots.next().unwrap());
    }

    // Overlays draw last so they sit on top of the chrome.
    if let Mode::Menu { menu, index } = &app.mode {
        menu_bar::draw_dropdown(app, frame, area, *menu, *index);
    }
    dialogs::draw(app, frame, area);
}
