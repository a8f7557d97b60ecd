//! UI modes: which surface currently owns the keyboard.

use folio_core::DocumentId;

/// Top-level menus, in bar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Menu {
    Application,
    Document,
    Edit,
    View,
    Format,
    Tools,
    Settings,
    Help,
}

impl Menu {
    pub const ALL: [Menu; 8] = [
        Menu::Application,
        Menu::Document,
        Menu::Edit,
        Menu::View,
        Menu::Format,
        Menu::Tools,
        Menu::Settings,
        Menu::Help,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Menu::Application => "Application",
            Menu::Document => "Document",
            Menu::Edit => "Edit",
            Menu::View => "View",
            Menu::Format => "Format",
            Menu::Tools => "Tools",
            Menu::Settings => "Settings",
            Menu::Help => "Help",
        }
    }

    pub fn next(&self) -> Menu {
        let index = Menu::ALL.iter().position(|m| m == self).unwrap_or(0);
        Menu::ALL[(index + 1) % Menu::ALL.len()]
    }

    pub fn previous(&self) -> Menu {
        let index = Menu::ALL.iter().position(|m| m == self).unwrap_or(0);
        Menu::ALL[(index + Menu::ALL.len() - 1) % Menu::ALL.len()]
    }
}

/// Bulk actions that need a yes/cancel round-trip first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmKind {
    CloseOthers,
    CloseAll,
    Quit,
}

impl ConfirmKind {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmKind::CloseOthers => "Close all documents beside current one",
            ConfirmKind::CloseAll => "Close all documents",
            ConfirmKind::Quit => "Quit the application",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ConfirmKind::CloseOthers => {
                "This will close all open documents beside the current one.\nAre you sure you want to continue?"
            }
            ConfirmKind::CloseAll => {
                "This will close all open documents.\nAre you sure you want to continue?"
            }
            ConfirmKind::Quit => {
                "This will close all open documents and quit the application.\nAre you sure you want to continue?"
            }
        }
    }
}

/// What a submitted path prompt feeds into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    /// Save-as for `id`; `remaining` queues further untitled documents
    /// from a save-all sweep.
    SaveAs {
        id: DocumentId,
        remaining: Vec<DocumentId>,
    },
    SaveCopyAs {
        id: DocumentId,
    },
    /// New file name (not a path) for the active document.
    Rename {
        id: DocumentId,
    },
}

#[derive(Clone, Debug)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind, input: String) -> Self {
        Self { kind, input }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::Open => "Open Document",
            PromptKind::SaveAs { .. } => "Save Document",
            PromptKind::SaveCopyAs { .. } => "Save Copy of Document",
            PromptKind::Rename { .. } => "Rename file",
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            PromptKind::Open => "Path",
            PromptKind::SaveAs { .. } | PromptKind::SaveCopyAs { .. } => "Save to",
            PromptKind::Rename { .. } => "New file name",
        }
    }
}

/// Colophon dialog pages.
pub const COLOPHON_PAGES: [&str; 4] = ["About", "Authors", "Environment", "License"];

/// Rows in the Preferences dialog, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceRow {
    ShowPath,
    ShowMenuBar,
    ShowStatusBar,
    ShowTabBar,
    TabAtBottom,
    TabAutoHide,
    ToolButtonStyle,
    RecentLimit,
}

impl PreferenceRow {
    pub const ALL: [PreferenceRow; 8] = [
        PreferenceRow::ShowPath,
        PreferenceRow::ShowMenuBar,
        PreferenceRow::ShowStatusBar,
        PreferenceRow::ShowTabBar,
        PreferenceRow::TabAtBottom,
        PreferenceRow::TabAutoHide,
        PreferenceRow::ToolButtonStyle,
        PreferenceRow::RecentLimit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PreferenceRow::ShowPath => "Show path in title",
            PreferenceRow::ShowMenuBar => "Show menubar",
            PreferenceRow::ShowStatusBar => "Show statusbar",
            PreferenceRow::ShowTabBar => "Show tabbar",
            PreferenceRow::TabAtBottom => "Tab bar at bottom",
            PreferenceRow::TabAutoHide => "Auto-hide tab bar",
            PreferenceRow::ToolButtonStyle => "Tool button style",
            PreferenceRow::RecentLimit => "Recent documents limit",
        }
    }
}

#[derive(Clone, Debug)]
pub enum Dialog {
    About,
    Colophon { page: usize },
    Preferences { row: usize },
    Confirm(ConfirmKind),
    Error { title: String, text: String },
}

#[derive(Clone, Debug)]
pub enum Mode {
    Normal,
    Menu { menu: Menu, index: usize },
    Dialog(Dialog),
    Prompt(Prompt),
}
