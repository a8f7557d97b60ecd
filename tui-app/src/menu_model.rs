//! Menu model: typed descriptors for the in-app menu bar.
//!
//! Single source of truth for menu structure, item counts, and action
//! dispatch. Both key handling in `app.rs` and rendering in `views/`
//! import it, so the two can never drift apart.

use folio_config::{Keybindings, Settings, ToolButtonStyle, ToolbarCategory};
use folio_core::caption;
use folio_shell::Workspace;

use crate::mode::Menu;

/// Typed action enum for keyboard-navigable menu items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    About,
    Colophon,
    Preferences,
    Quit,
    New,
    Open,
    OpenRecent(usize),
    ClearRecent,
    Save,
    SaveAs,
    SaveCopyAs,
    SaveAll,
    CopyPath,
    CopyFilename,
    Rename,
    Close,
    CloseOther,
    CloseAll,
    ShowPath,
    ShowMenubar,
    ShowStatusbar,
    ShowTabbar,
    ToggleTabPosition,
    ToggleTabAutoHide,
    ToggleToolbar(ToolbarCategory),
    ToolButtonStyle(ToolButtonStyle),
    FullScreen,
}

/// Menu entry descriptor.
pub enum MenuEntry {
    Item {
        label: String,
        shortcut: Option<String>,
        action: MenuAction,
        enabled: bool,
        accel: Option<char>,
    },
    Toggle {
        label: String,
        shortcut: Option<String>,
        action: MenuAction,
        checked: bool,
        enabled: bool,
        accel: Option<char>,
    },
    Separator,
    Label(&'static str),
    Disabled(&'static str),
}

impl MenuEntry {
    fn item(label: &str, action: MenuAction, accel: Option<char>) -> Self {
        MenuEntry::Item {
            label: label.to_string(),
            shortcut: None,
            action,
            enabled: true,
            accel,
        }
    }

    fn with_shortcut(self, shortcut: Option<String>) -> Self {
        match self {
            MenuEntry::Item {
                label,
                action,
                enabled,
                accel,
                ..
            } => MenuEntry::Item {
                label,
                shortcut,
                action,
                enabled,
                accel,
            },
            MenuEntry::Toggle {
                label,
                action,
                checked,
                enabled,
                accel,
                ..
            } => MenuEntry::Toggle {
                label,
                shortcut,
                action,
                checked,
                enabled,
                accel,
            },
            other => other,
        }
    }

    fn enabled_if(self, enabled: bool) -> Self {
        match self {
            MenuEntry::Item {
                label,
                shortcut,
                action,
                accel,
                ..
            } => MenuEntry::Item {
                label,
                shortcut,
                action,
                enabled,
                accel,
            },
            MenuEntry::Toggle {
                label,
                shortcut,
                action,
                checked,
                accel,
                ..
            } => MenuEntry::Toggle {
                label,
                shortcut,
                action,
                checked,
                enabled,
                accel,
            },
            other => other,
        }
    }

    fn toggle(label: &str, action: MenuAction, checked: bool, accel: Option<char>) -> Self {
        MenuEntry::Toggle {
            label: label.to_string(),
            shortcut: None,
            action,
            checked,
            enabled: true,
            accel,
        }
    }
}

/// Everything the menu builders need to reflect current state.
pub struct MenuContext<'a> {
    pub settings: &'a Settings,
    pub workspace: &'a Workspace,
    pub keys: &'a Keybindings,
    pub full_screen: bool,
}

/// Pretty-print a chord string for menu display: "ctrl+shift+s" -> "Ctrl+Shift+S".
fn pretty_chord(chord: &str) -> String {
    chord
        .split('+')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

fn shortcut(cx: &MenuContext, action: &str) -> Option<String> {
    cx.keys.chord_for(action).map(pretty_chord)
}

pub fn application_menu_entries(cx: &MenuContext) -> Vec<MenuEntry> {
    vec![
        MenuEntry::item("About Folio", MenuAction::About, Some('a')),
        MenuEntry::item("Colophon", MenuAction::Colophon, Some('c')),
        MenuEntry::Separator,
        MenuEntry::item("Preferences...", MenuAction::Preferences, Some('p')),
        MenuEntry::Separator,
        MenuEntry::item("Quit", MenuAction::Quit, Some('q')).with_shortcut(shortcut(cx, "quit")),
    ]
}

pub fn document_menu_entries(cx: &MenuContext) -> Vec<MenuEntry> {
    let ws = cx.workspace;
    let has_active = ws.has_active_document();
    let has_file = ws.active_has_path();

    let mut entries = vec![
        MenuEntry::item("New", MenuAction::New, Some('n')).with_shortcut(shortcut(cx, "new")),
        MenuEntry::item("Open...", MenuAction::Open, Some('o')).with_shortcut(shortcut(cx, "open")),
        MenuEntry::Separator,
        MenuEntry::Label("Open Recent"),
    ];

    if ws.recent().is_empty() {
        entries.push(MenuEntry::Disabled("No recent documents"));
    } else {
        for (i, path) in ws.recent().iter().enumerate().take(9) {
            let accel = char::from_digit(i as u32 + 1, 10);
            entries.push(MenuEntry::item(
                &caption::recent_entry(path),
                MenuAction::OpenRecent(i),
                accel,
            ));
        }
        entries.push(MenuEntry::item(
            "Clear List",
            MenuAction::ClearRecent,
            Some('t'),
        ));
    }

    entries.extend([
        MenuEntry::Separator,
        MenuEntry::item("Save", MenuAction::Save, Some('s'))
            .with_shortcut(shortcut(cx, "save"))
            .enabled_if(has_active),
        MenuEntry::item("Save As...", MenuAction::SaveAs, Some('a'))
            .with_shortcut(shortcut(cx, "save-as"))
            .enabled_if(has_active),
        MenuEntry::item("Save Copy As...", MenuAction::SaveCopyAs, Some('c')).enabled_if(has_active),
        MenuEntry::item("Save All", MenuAction::SaveAll, Some('l'))
            .with_shortcut(shortcut(cx, "save-all"))
            .enabled_if(has_active),
        MenuEntry::Separator,
        MenuEntry::item("Copy Path", MenuAction::CopyPath, Some('y')).enabled_if(has_file),
        MenuEntry::item("Copy Filename", MenuAction::CopyFilename, Some('f')).enabled_if(has_file),
        MenuEntry::Separator,
        MenuEntry::item("Rename...", MenuAction::Rename, Some('m')).enabled_if(has_file),
        MenuEntry::Separator,
        MenuEntry::item("Close", MenuAction::Close, Some('e'))
            .with_shortcut(shortcut(cx, "close"))
            .enabled_if(has_active),
        MenuEntry::item("Close Others", MenuAction::CloseOther, Some('h'))
            .enabled_if(ws.close_other_enabled()),
        MenuEntry::item("Close All", MenuAction::CloseAll, Some('d')).enabled_if(has_active),
    ]);

    entries
}

// Placeholder menus: the table surface itself is out of scope, so these
// only reserve their place in the bar.

pub fn edit_menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::Disabled("Undo"),
        MenuEntry::Disabled("Redo"),
        MenuEntry::Separator,
        MenuEntry::Disabled("Cut"),
        MenuEntry::Disabled("Copy"),
        MenuEntry::Disabled("Paste"),
    ]
}

pub fn view_menu_entries() -> Vec<MenuEntry> {
    vec![MenuEntry::Disabled("Zoom In"), MenuEntry::Disabled("Zoom Out")]
}

pub fn format_menu_entries() -> Vec<MenuEntry> {
    vec![MenuEntry::Disabled("Cells...")]
}

pub fn tools_menu_entries() -> Vec<MenuEntry> {
    vec![MenuEntry::Disabled("Macros...")]
}

pub fn settings_menu_entries(cx: &MenuContext) -> Vec<MenuEntry> {
    let settings = cx.settings;
    let style = settings.toolbar.button_style;

    let mut entries = vec![
        MenuEntry::toggle(
            "Show Path in Titlebar",
            MenuAction::ShowPath,
            settings.show_path,
            Some('p'),
        ),
        MenuEntry::Separator,
        MenuEntry::toggle(
            "Show Menubar",
            MenuAction::ShowMenubar,
            settings.show_menu_bar,
            Some('m'),
        )
        .with_shortcut(shortcut(cx, "toggle-menubar")),
        MenuEntry::Separator,
    ];

    for (category, accel) in [
        (ToolbarCategory::Application, 'a'),
        (ToolbarCategory::Document, 'd'),
        (ToolbarCategory::Edit, 'e'),
        (ToolbarCategory::View, 'v'),
        (ToolbarCategory::Format, 'f'),
        (ToolbarCategory::Tools, 't'),
        (ToolbarCategory::Settings, 's'),
        (ToolbarCategory::Help, 'l'),
    ] {
        entries.push(MenuEntry::toggle(
            &format!("Show {} Toolbar", category.label()),
            MenuAction::ToggleToolbar(category),
            settings.toolbar.visible(category),
            Some(accel),
        ));
    }

    entries.extend([
        MenuEntry::Label("Tool Button Style"),
        MenuEntry::toggle(
            "Icon Only",
            MenuAction::ToolButtonStyle(ToolButtonStyle::IconOnly),
            style == ToolButtonStyle::IconOnly,
            Some('i'),
        ),
        MenuEntry::toggle(
            "Text Only",
            MenuAction::ToolButtonStyle(ToolButtonStyle::TextOnly),
            style == ToolButtonStyle::TextOnly,
            Some('x'),
        ),
        MenuEntry::toggle(
            "Text Beside Icon",
            MenuAction::ToolButtonStyle(ToolButtonStyle::TextBesideIcon),
            style == ToolButtonStyle::TextBesideIcon,
            Some('c'),
        ),
        MenuEntry::toggle(
            "Default",
            MenuAction::ToolButtonStyle(ToolButtonStyle::FollowStyle),
            style == ToolButtonStyle::FollowStyle,
            Some('y'),
        ),
        MenuEntry::Separator,
        MenuEntry::toggle(
            "Show Statusbar",
            MenuAction::ShowStatusbar,
            settings.show_status_bar,
            Some('u'),
        ),
        MenuEntry::toggle(
            "Show Tabbar",
            MenuAction::ShowTabbar,
            settings.show_tab_bar,
            Some('b'),
        ),
        MenuEntry::toggle(
            "Tab Bar at Bottom",
            MenuAction::ToggleTabPosition,
            settings.tab.position == folio_config::TabPosition::Bottom,
            Some('o'),
        ),
        MenuEntry::toggle(
            "Auto-hide Tab Bar",
            MenuAction::ToggleTabAutoHide,
            settings.tab.auto_hide,
            Some('h'),
        ),
        MenuEntry::Separator,
        MenuEntry::toggle(
            "Full Screen Mode",
            MenuAction::FullScreen,
            cx.full_screen,
            Some('r'),
        )
        .with_shortcut(shortcut(cx, "toggle-fullscreen")),
    ]);

    entries
}

pub fn help_menu_entries() -> Vec<MenuEntry> {
    vec![MenuEntry::Disabled("Folio Handbook")]
}

pub fn menu_entries(menu: Menu, cx: &MenuContext) -> Vec<MenuEntry> {
    match menu {
        Menu::Application => application_menu_entries(cx),
        Menu::Document => document_menu_entries(cx),
        Menu::Edit => edit_menu_entries(),
        Menu::View => view_menu_entries(),
        Menu::Format => format_menu_entries(),
        Menu::Tools => tools_menu_entries(),
        Menu::Settings => settings_menu_entries(cx),
        Menu::Help => help_menu_entries(),
    }
}

/// Count selectable items (Item + Toggle) in a menu.
pub fn menu_item_count(menu: Menu, cx: &MenuContext) -> usize {
    menu_entries(menu, cx)
        .iter()
        .filter(|e| matches!(e, MenuEntry::Item { .. } | MenuEntry::Toggle { .. }))
        .count()
}

/// Action and enablement for the selectable item at `index`.
pub fn action_at(menu: Menu, cx: &MenuContext, index: usize) -> Option<(MenuAction, bool)> {
    let entries = menu_entries(menu, cx);
    let mut selectable = 0;
    for entry in &entries {
        match entry {
            MenuEntry::Item {
                action, enabled, ..
            }
            | MenuEntry::Toggle {
                action, enabled, ..
            } => {
                if selectable == index {
                    return Some((*action, *enabled));
                }
                selectable += 1;
            }
            _ => {}
        }
    }
    None
}

/// Resolve the accelerator character for a menu entry.
/// Uses explicit `accel` if set, otherwise falls back to first letter of label.
pub fn resolve_accel(label: &str, accel: Option<char>) -> char {
    accel
        .unwrap_or_else(|| label.chars().next().unwrap_or(' '))
        .to_ascii_lowercase()
}

/// Find the selectable item whose accelerator matches `ch`.
pub fn find_by_accel(menu: Menu, cx: &MenuContext, ch: char) -> Option<(usize, MenuAction, bool)> {
    let ch = ch.to_ascii_lowercase();
    let entries = menu_entries(menu, cx);
    let mut selectable = 0;
    for entry in &entries {
        match entry {
            MenuEntry::Item {
                label,
                action,
                enabled,
                accel,
                ..
            }
            | MenuEntry::Toggle {
                label,
                action,
                enabled,
                accel,
                ..
            } => {
                if resolve_accel(label, *accel) == ch {
                    return Some((selectable, *action, *enabled));
                }
                selectable += 1;
            }
            _ => {}
        }
    }
    None
}
