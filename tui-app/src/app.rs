use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_config::{
    ConfigStore, Keybindings, Session, Settings, TabPosition, ToolButtonStyle,
};
use folio_config::session::Geometry;
use folio_core::{caption, DocumentId};
use folio_shell::{ShellError, Workspace, WorkspaceEvent};

use crate::keys::KeyMap;
use crate::menu_model::{self, MenuAction, MenuContext};
use crate::mode::{
    ConfirmKind, Dialog, Menu, Mode, PreferenceRow, Prompt, PromptKind, COLOPHON_PAGES,
};

const STATUS_TTL: Duration = Duration::from_secs(4);

pub struct StatusMessage {
    text: String,
    expires: Instant,
}

/// Top-level application state: the workspace, the settings, and whichever
/// surface currently owns the keyboard.
pub struct App {
    pub workspace: Workspace,
    pub settings: Settings,
    pub keybindings: Keybindings,
    keymap: KeyMap,
    config: ConfigStore,
    pub mode: Mode,
    status: Option<StatusMessage>,
    pub clipboard: Option<String>,
    pub full_screen: bool,
    pub should_quit: bool,
    pub last_size: (u16, u16),
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        let settings = config.load_settings();
        let keybindings = config.load_keybindings();
        let keymap = KeyMap::from_bindings(&keybindings);
        let workspace = Workspace::new(settings.recent_documents_limit);

        Self {
            workspace,
            settings,
            keybindings,
            keymap,
            config,
            mode: Mode::Normal,
            status: None,
            clipboard: None,
            full_screen: false,
            should_quit: false,
            last_size: (0, 0),
        }
    }

    /// Reopen what the previous run left behind.
    pub fn restore_session(&mut self) {
        if let Some(session) = self.config.load_session() {
            self.workspace.restore_recent(session.recent_documents);

            let mut opened = Vec::new();
            for path in &session.open_documents {
                match self.workspace.open(path) {
                    Ok(id) => opened.push(id),
                    Err(e) => log::warn!("could not reopen {}: {}", path.display(), e),
                }
            }
            if let Some(index) = session.active_document {
                if let Some(id) = opened.get(index) {
                    self.workspace.activate(*id);
                }
            }
            self.full_screen = session.full_screen;

            // Restored documents are not user activity; drop the events.
            self.workspace.drain_events();
        }
        self.set_status("Ready");
    }

    /// Save settings and session state. Called once at shutdown.
    pub fn persist(&self) {
        if let Err(e) = self.config.save_settings(&self.settings) {
            log::error!("could not save settings: {}", e);
        }

        let open_documents: Vec<PathBuf> = self
            .workspace
            .documents()
            .iter()
            .filter_map(|d| d.path().map(|p| p.to_path_buf()))
            .collect();
        let active_document = self.workspace.active_document().and_then(|active| {
            let path = active.path()?;
            open_documents.iter().position(|p| p == path)
        });

        let mut session = Session::new();
        session.geometry = Geometry {
            columns: self.last_size.0,
            rows: self.last_size.1,
        };
        session.full_screen = self.full_screen;
        session.open_documents = open_documents;
        session.active_document = active_document;
        session.recent_documents = self.workspace.recent().paths().to_vec();

        if let Err(e) = self.config.save_session(&session) {
            log::error!("could not save session: {}", e);
        }
    }

    //
    // Status bar
    //

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires: Instant::now() + STATUS_TTL,
        });
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    /// Drop the status message once its time is up.
    pub fn tick(&mut self) {
        if let Some(status) = &self.status {
            if Instant::now() >= status.expires {
                self.status = None;
            }
        }
    }

    //
    // Chrome visibility
    //

    pub fn menu_bar_visible(&self) -> bool {
        self.settings.show_menu_bar && !self.full_screen
    }

    pub fn status_bar_visible(&self) -> bool {
        self.settings.show_status_bar && !self.full_screen
    }

    pub fn toolbar_visible(&self) -> bool {
        !self.full_screen
            && folio_config::ToolbarCategory::ALL
                .iter()
                .any(|c| self.settings.toolbar.visible(*c))
    }

    pub fn tab_bar_visible(&self) -> bool {
        self.settings.show_tab_bar
            && !self.full_screen
            && !(self.settings.tab.auto_hide && self.workspace.len() <= 1)
    }

    pub fn config_dir(&self) -> &std::path::Path {
        self.config.dir()
    }

    /// Terminal window title for the active document.
    pub fn window_title(&self) -> String {
        match self.workspace.window_title(self.settings.show_path) {
            Some(title) => format!("{} - Folio", title),
            None => "Folio".to_string(),
        }
    }

    //
    // Key dispatch
    //

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode.clone() {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Menu { menu, index } => self.handle_menu_key(menu, index, key),
            Mode::Dialog(dialog) => self.handle_dialog_key(dialog, key),
            Mode::Prompt(prompt) => self.handle_prompt_key(prompt, key),
        }
        self.note_events();
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.keymap.lookup(&key) {
            self.apply(action);
            return;
        }

        match key.code {
            KeyCode::F(10) => {
                self.mode = Mode::Menu {
                    menu: Menu::Application,
                    index: 0,
                };
            }
            KeyCode::Tab => self.workspace.activate_next(),
            KeyCode::BackTab => self.workspace.activate_previous(),
            KeyCode::PageDown if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.workspace.activate_next()
            }
            KeyCode::PageUp if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.workspace.activate_previous()
            }
            KeyCode::Esc if self.full_screen => self.full_screen = false,
            // The table is a placeholder; plain typing just dirties the
            // active document the way real edits would.
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                    && (c.is_alphanumeric() || c == ' ') =>
            {
                if let Some(id) = self.workspace.active_id() {
                    self.workspace.set_modified(id, true);
                }
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, menu: Menu, index: usize, key: KeyEvent) {
        let count = {
            let cx = self.menu_context();
            menu_model::menu_item_count(menu, &cx)
        };

        match key.code {
            KeyCode::Esc | KeyCode::F(10) => self.mode = Mode::Normal,
            KeyCode::Left => {
                self.mode = Mode::Menu {
                    menu: menu.previous(),
                    index: 0,
                }
            }
            KeyCode::Right => {
                self.mode = Mode::Menu {
                    menu: menu.next(),
                    index: 0,
                }
            }
            KeyCode::Up if count > 0 => {
                self.mode = Mode::Menu {
                    menu,
                    index: (index + count - 1) % count,
                }
            }
            KeyCode::Down if count > 0 => {
                self.mode = Mode::Menu {
                    menu,
                    index: (index + 1) % count,
                }
            }
            KeyCode::Home if count > 0 => self.mode = Mode::Menu { menu, index: 0 },
            KeyCode::End if count > 0 => {
                self.mode = Mode::Menu {
                    menu,
                    index: count - 1,
                }
            }
            KeyCode::Enter => {
                let hit = {
                    let cx = self.menu_context();
                    menu_model::action_at(menu, &cx, index)
                };
                if let Some((action, true)) = hit {
                    self.mode = Mode::Normal;
                    self.apply(action);
                }
            }
            KeyCode::Char(c) => {
                let hit = {
                    let cx = self.menu_context();
                    menu_model::find_by_accel(menu, &cx, c)
                };
                if let Some((_, action, true)) = hit {
                    self.mode = Mode::Normal;
                    self.apply(action);
                }
            }
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, dialog: Dialog, key: KeyEvent) {
        match dialog {
            Dialog::About | Dialog::Error { .. } => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Normal,
                _ => {}
            },
            Dialog::Colophon { page } => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Normal,
                KeyCode::Right | KeyCode::Tab => {
                    self.mode = Mode::Dialog(Dialog::Colophon {
                        page: (page + 1) % COLOPHON_PAGES.len(),
                    })
                }
                KeyCode::Left | KeyCode::BackTab => {
                    self.mode = Mode::Dialog(Dialog::Colophon {
                        page: (page + COLOPHON_PAGES.len() - 1) % COLOPHON_PAGES.len(),
                    })
                }
                _ => {}
            },
            Dialog::Preferences { row } => self.handle_preferences_key(row, key),
            Dialog::Confirm(kind) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.mode = Mode::Normal;
                    self.confirm_accepted(kind);
                }
                KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('n') => {
                    self.mode = Mode::Normal;
                }
                _ => {}
            },
        }
    }

    fn handle_preferences_key(&mut self, row: usize, key: KeyEvent) {
        let rows = PreferenceRow::ALL.len();
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Up => {
                self.mode = Mode::Dialog(Dialog::Preferences {
                    row: (row + rows - 1) % rows,
                })
            }
            KeyCode::Down => {
                self.mode = Mode::Dialog(Dialog::Preferences {
                    row: (row + 1) % rows,
                })
            }
            KeyCode::Char(' ') => self.toggle_preference(PreferenceRow::ALL[row], 1),
            KeyCode::Right => self.toggle_preference(PreferenceRow::ALL[row], 1),
            KeyCode::Left => self.toggle_preference(PreferenceRow::ALL[row], -1),
            _ => {}
        }
    }

    fn toggle_preference(&mut self, row: PreferenceRow, direction: i32) {
        let settings = &mut self.settings;
        match row {
            PreferenceRow::ShowPath => settings.show_path = !settings.show_path,
            PreferenceRow::ShowMenuBar => settings.show_menu_bar = !settings.show_menu_bar,
            PreferenceRow::ShowStatusBar => settings.show_status_bar = !settings.show_status_bar,
            PreferenceRow::ShowTabBar => settings.show_tab_bar = !settings.show_tab_bar,
            PreferenceRow::TabAtBottom => {
                settings.tab.position = match settings.tab.position {
                    TabPosition::Top => TabPosition::Bottom,
                    TabPosition::Bottom => TabPosition::Top,
                }
            }
            PreferenceRow::TabAutoHide => settings.tab.auto_hide = !settings.tab.auto_hide,
            PreferenceRow::ToolButtonStyle => {
                let order = [
                    ToolButtonStyle::FollowStyle,
                    ToolButtonStyle::IconOnly,
                    ToolButtonStyle::TextOnly,
                    ToolButtonStyle::TextBesideIcon,
                ];
                let position = order
                    .iter()
                    .position(|s| *s == settings.toolbar.button_style)
                    .unwrap_or(0);
                let next = (position as i32 + direction).rem_euclid(order.len() as i32);
                settings.toolbar.button_style = order[next as usize];
            }
            PreferenceRow::RecentLimit => {
                let limit = settings.recent_documents_limit as i32 + direction;
                settings.recent_documents_limit = limit.clamp(1, 30) as usize;
                self.workspace
                    .set_recent_limit(settings.recent_documents_limit);
            }
        }
    }

    fn handle_prompt_key(&mut self, mut prompt: Prompt, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                let input = prompt.input.trim().to_string();
                if !input.is_empty() {
                    self.submit_prompt(prompt.kind, input);
                }
            }
            KeyCode::Backspace => {
                prompt.input.pop();
                self.mode = Mode::Prompt(prompt);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.input.push(c);
                self.mode = Mode::Prompt(prompt);
            }
            _ => {}
        }
    }

    //
    // Actions
    //

    pub fn menu_context(&self) -> MenuContext<'_> {
        MenuContext {
            settings: &self.settings,
            workspace: &self.workspace,
            keys: &self.keybindings,
            full_screen: self.full_screen,
        }
    }

    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::About => self.mode = Mode::Dialog(Dialog::About),
            MenuAction::Colophon => self.mode = Mode::Dialog(Dialog::Colophon { page: 0 }),
            MenuAction::Preferences => self.mode = Mode::Dialog(Dialog::Preferences { row: 0 }),
            MenuAction::Quit => self.request_quit(),

            MenuAction::New => {
                self.workspace.new_untitled();
            }
            MenuAction::Open => {
                self.mode = Mode::Prompt(Prompt::new(PromptKind::Open, String::new()));
            }
            MenuAction::OpenRecent(index) => {
                if let Some(path) = self.workspace.recent().get(index).map(|p| p.to_path_buf()) {
                    if let Err(e) = self.workspace.open(path) {
                        self.shell_error(e);
                    }
                }
            }
            MenuAction::ClearRecent => self.workspace.clear_recent(),

            MenuAction::Save => {
                if let Some(id) = self.workspace.active_id() {
                    if self.workspace.active_has_path() {
                        if let Err(e) = self.workspace.save(id) {
                            self.shell_error(e);
                        }
                    } else {
                        self.prompt_save_as(id, Vec::new());
                    }
                }
            }
            MenuAction::SaveAs => {
                if let Some(id) = self.workspace.active_id() {
                    self.prompt_save_as(id, Vec::new());
                }
            }
            MenuAction::SaveCopyAs => {
                if let Some(id) = self.workspace.active_id() {
                    self.mode = Mode::Prompt(Prompt::new(
                        PromptKind::SaveCopyAs { id },
                        String::new(),
                    ));
                }
            }
            MenuAction::SaveAll => match self.workspace.save_all() {
                Ok(untitled) => {
                    if let Some((first, rest)) = untitled.split_first() {
                        self.prompt_save_as(*first, rest.to_vec());
                    }
                }
                Err(e) => self.shell_error(e),
            },

            MenuAction::CopyPath => {
                if let Some(id) = self.workspace.active_id() {
                    if let Some(text) = self.workspace.path_text(id) {
                        self.clipboard = Some(text);
                        self.set_status("Path copied to clipboard");
                    }
                }
            }
            MenuAction::CopyFilename => {
                if let Some(id) = self.workspace.active_id() {
                    if let Some(text) = self.workspace.filename_text(id) {
                        self.clipboard = Some(text);
                        self.set_status("Filename copied to clipboard");
                    }
                }
            }
            MenuAction::Rename => {
                if let Some(id) = self.workspace.active_id() {
                    let current = self
                        .workspace
                        .filename_text(id)
                        .unwrap_or_default();
                    self.mode = Mode::Prompt(Prompt::new(PromptKind::Rename { id }, current));
                }
            }

            MenuAction::Close => {
                if let Some(id) = self.workspace.active_id() {
                    self.workspace.close(id);
                }
            }
            MenuAction::CloseOther => {
                if self.workspace.close_other_enabled() {
                    self.mode = Mode::Dialog(Dialog::Confirm(ConfirmKind::CloseOthers));
                }
            }
            MenuAction::CloseAll => {
                if !self.workspace.is_empty() {
                    self.mode = Mode::Dialog(Dialog::Confirm(ConfirmKind::CloseAll));
                }
            }

            MenuAction::ShowPath => self.settings.show_path = !self.settings.show_path,
            MenuAction::ShowMenubar => {
                self.settings.show_menu_bar = !self.settings.show_menu_bar
            }
            MenuAction::ShowStatusbar => {
                self.settings.show_status_bar = !self.settings.show_status_bar
            }
            MenuAction::ShowTabbar => self.settings.show_tab_bar = !self.settings.show_tab_bar,
            MenuAction::ToggleTabPosition => {
                self.settings.tab.position = match self.settings.tab.position {
                    TabPosition::Top => TabPosition::Bottom,
                    TabPosition::Bottom => TabPosition::Top,
                }
            }
            MenuAction::ToggleTabAutoHide => {
                self.settings.tab.auto_hide = !self.settings.tab.auto_hide
            }
            MenuAction::ToggleToolbar(category) => self.settings.toolbar.toggle(category),
            MenuAction::ToolButtonStyle(style) => self.settings.toolbar.button_style = style,
            MenuAction::FullScreen => self.full_screen = !self.full_screen,
        }
    }

    fn prompt_save_as(&mut self, id: DocumentId, remaining: Vec<DocumentId>) {
        let prefill = self
            .workspace
            .path_text(id)
            .unwrap_or_default();
        self.mode = Mode::Prompt(Prompt::new(PromptKind::SaveAs { id, remaining }, prefill));
    }

    fn submit_prompt(&mut self, kind: PromptKind, input: String) {
        match kind {
            PromptKind::Open => {
                let path = PathBuf::from(shellexpand::tilde(&input).into_owned());
                if let Err(e) = self.workspace.open(path) {
                    self.shell_error(e);
                }
            }
            PromptKind::SaveAs { id, remaining } => {
                let path = PathBuf::from(shellexpand::tilde(&input).into_owned());
                match self.workspace.save_as(id, path) {
                    Ok(()) => {
                        if let Some((next, rest)) = remaining.split_first() {
                            self.prompt_save_as(*next, rest.to_vec());
                        }
                    }
                    Err(e) => self.shell_error(e),
                }
            }
            PromptKind::SaveCopyAs { id } => {
                let path = PathBuf::from(shellexpand::tilde(&input).into_owned());
                if let Err(e) = self.workspace.save_copy_as(id, path) {
                    self.shell_error(e);
                }
            }
            PromptKind::Rename { id } => {
                if let Err(e) = self.workspace.rename(id, &input) {
                    self.shell_error(e);
                }
            }
        }
    }

    fn request_quit(&mut self) {
        if self.workspace.is_empty() {
            self.should_quit = true;
        } else {
            self.mode = Mode::Dialog(Dialog::Confirm(ConfirmKind::Quit));
        }
    }

    fn confirm_accepted(&mut self, kind: ConfirmKind) {
        match kind {
            ConfirmKind::CloseOthers => {
                if let Some(id) = self.workspace.active_id() {
                    self.workspace.close_others(id);
                }
            }
            ConfirmKind::CloseAll => {
                self.workspace.close_all();
            }
            ConfirmKind::Quit => {
                self.workspace.close_all();
                self.should_quit = true;
            }
        }
    }

    fn shell_error(&mut self, error: ShellError) {
        log::error!("{}", error);
        let (title, text) = match &error {
            ShellError::FileExists(path) => (
                "File Already Exists".to_string(),
                format!(
                    "A file with the name \"{}\" already exists!",
                    path.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string())
                ),
            ),
            ShellError::UntitledDocument => (
                "No File Name".to_string(),
                "The document has no file name yet. Use Save As first.".to_string(),
            ),
            ShellError::Io { .. } => ("File Error".to_string(), error.to_string()),
            ShellError::UnknownDocument => ("Error".to_string(), error.to_string()),
        };
        self.mode = Mode::Dialog(Dialog::Error { title, text });
    }

    /// Turn drained workspace events into status-bar messages.
    fn note_events(&mut self) {
        let events = self.workspace.drain_events();
        for event in events {
            match event {
                WorkspaceEvent::DocumentCreated(_) => self.set_status("New document"),
                WorkspaceEvent::DocumentOpened(id) => {
                    if let Some(doc) = self.workspace.document(id) {
                        self.set_status(format!("Opened {}", doc.caption(false)));
                    }
                }
                WorkspaceEvent::DocumentSaved(id) => {
                    if let Some(doc) = self.workspace.document(id) {
                        self.set_status(format!("Saved {}", doc.caption(false)));
                    }
                }
                WorkspaceEvent::DocumentCopySaved(_, path) => {
                    self.set_status(format!("Saved copy to {}", caption::abbreviate_home(&path)));
                }
                WorkspaceEvent::DocumentPathChanged(id) => {
                    if let Some(doc) = self.workspace.document(id) {
                        self.set_status(format!("Now {}", doc.caption(false)));
                    }
                }
                WorkspaceEvent::DocumentClosed(_) => self.set_status("Document closed"),
                WorkspaceEvent::DocumentModifiedChanged(..)
                | WorkspaceEvent::DocumentActivated(_)
                | WorkspaceEvent::DocumentCountChanged(_)
                | WorkspaceEvent::RecentListChanged => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigStore::new(dir.path().join("config"));
        (App::new(config), dir)
    }

    #[test]
    fn ctrl_n_creates_a_document() {
        let (mut app, _dir) = app();
        app.handle_key(ctrl('n'));
        assert_eq!(app.workspace.len(), 1);
        assert_eq!(app.status_text(), Some("New document"));
    }

    #[test]
    fn typing_dirties_the_active_document() {
        let (mut app, _dir) = app();
        app.handle_key(ctrl('n'));
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.workspace.active_document().unwrap().modified());
    }

    #[test]
    fn quit_with_documents_asks_first() {
        let (mut app, _dir) = app();
        app.handle_key(ctrl('n'));
        app.handle_key(ctrl('q'));
        assert!(matches!(
            app.mode,
            Mode::Dialog(Dialog::Confirm(ConfirmKind::Quit))
        ));
        assert!(!app.should_quit);

        // Cancel aborts with no state change.
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.should_quit);
        assert_eq!(app.workspace.len(), 1);

        // Accepting closes everything and quits.
        app.handle_key(ctrl('q'));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.should_quit);
        assert!(app.workspace.is_empty());
    }

    #[test]
    fn quit_without_documents_skips_the_dialog() {
        let (mut app, _dir) = app();
        app.handle_key(ctrl('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn menu_navigation_triggers_actions() {
        let (mut app, _dir) = app();
        app.handle_key(key(KeyCode::F(10)));
        assert!(matches!(
            app.mode,
            Mode::Menu {
                menu: Menu::Application,
                index: 0
            }
        ));

        // Right to Document, accelerator 'n' fires New.
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Char('n')));
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.workspace.len(), 1);
    }

    #[test]
    fn disabled_menu_items_do_not_fire() {
        let (mut app, _dir) = app();
        app.handle_key(key(KeyCode::F(10)));
        app.handle_key(key(KeyCode::Right));
        // Close Others is disabled with no documents.
        app.handle_key(key(KeyCode::Char('h')));
        assert!(matches!(app.mode, Mode::Menu { .. }));
    }

    #[test]
    fn open_prompt_loads_a_file() {
        let (mut app, dir) = app();
        let path = dir.path().join("sheet.fol");
        fs::write(&path, "cells").unwrap();

        app.apply(MenuAction::Open);
        assert!(matches!(app.mode, Mode::Prompt(_)));
        for c in path.to_str().unwrap().chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.workspace.len(), 1);
        assert!(app.workspace.active_has_path());
    }

    #[test]
    fn open_missing_file_shows_an_error_dialog() {
        let (mut app, dir) = app();
        app.apply(MenuAction::Open);
        for c in dir.path().join("absent.fol").to_str().unwrap().chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.mode, Mode::Dialog(Dialog::Error { .. })));
    }

    #[test]
    fn rename_collision_shows_the_collision_dialog() {
        let (mut app, dir) = app();
        let path = dir.path().join("old.fol");
        fs::write(&path, "x").unwrap();
        fs::write(dir.path().join("taken.fol"), "y").unwrap();
        app.workspace.open(&path).unwrap();
        app.workspace.drain_events();

        app.apply(MenuAction::Rename);
        let Mode::Prompt(prompt) = &mut app.mode else {
            panic!("expected rename prompt");
        };
        prompt.input = "taken.fol".to_string();
        app.handle_key(key(KeyCode::Enter));

        let Mode::Dialog(Dialog::Error { title, .. }) = &app.mode else {
            panic!("expected error dialog");
        };
        assert_eq!(title, "File Already Exists");
    }

    #[test]
    fn close_others_asks_then_closes() {
        let (mut app, _dir) = app();
        app.apply(MenuAction::New);
        app.apply(MenuAction::New);
        app.apply(MenuAction::New);

        app.apply(MenuAction::CloseOther);
        assert!(matches!(
            app.mode,
            Mode::Dialog(Dialog::Confirm(ConfirmKind::CloseOthers))
        ));
        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.workspace.len(), 1);
    }

    #[test]
    fn save_all_prompts_for_each_untitled_document() {
        let (mut app, dir) = app();
        app.apply(MenuAction::New);
        app.apply(MenuAction::New);

        app.apply(MenuAction::SaveAll);
        let Mode::Prompt(prompt) = &mut app.mode else {
            panic!("expected save-as prompt for first untitled document");
        };
        assert!(matches!(prompt.kind, PromptKind::SaveAs { .. }));
        prompt.input = dir.path().join("one.fol").to_str().unwrap().to_string();
        app.handle_key(key(KeyCode::Enter));

        // The second untitled document is queued right behind.
        let Mode::Prompt(prompt) = &mut app.mode else {
            panic!("expected save-as prompt for second untitled document");
        };
        prompt.input = dir.path().join("two.fol").to_str().unwrap().to_string();
        app.handle_key(key(KeyCode::Enter));

        assert!(matches!(app.mode, Mode::Normal));
        assert!(dir.path().join("one.fol").exists());
        assert!(dir.path().join("two.fol").exists());
    }

    #[test]
    fn full_screen_hides_all_chrome() {
        let (mut app, _dir) = app();
        assert!(app.menu_bar_visible());
        assert!(app.status_bar_visible());

        app.apply(MenuAction::FullScreen);
        assert!(!app.menu_bar_visible());
        assert!(!app.status_bar_visible());
        assert!(!app.toolbar_visible());
        assert!(!app.tab_bar_visible());

        // Esc leaves full screen.
        app.handle_key(key(KeyCode::Esc));
        assert!(app.menu_bar_visible());
    }

    #[test]
    fn tab_bar_auto_hide_kicks_in_at_one_document() {
        let (mut app, _dir) = app();
        app.settings.tab.auto_hide = true;
        app.apply(MenuAction::New);
        assert!(!app.tab_bar_visible());
        app.apply(MenuAction::New);
        assert!(app.tab_bar_visible());
    }

    #[test]
    fn preferences_dialog_edits_settings() {
        let (mut app, _dir) = app();
        app.apply(MenuAction::Preferences);

        // First row toggles "show path".
        let before = app.settings.show_path;
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.settings.show_path, !before);

        // Last row adjusts the recent limit with left/right.
        app.handle_key(key(KeyCode::Up));
        let before = app.settings.recent_documents_limit;
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.settings.recent_documents_limit, before - 1);
    }

    #[test]
    fn copy_path_fills_the_clipboard() {
        let (mut app, dir) = app();
        let path = dir.path().join("sheet.fol");
        fs::write(&path, "x").unwrap();
        app.workspace.open(&path).unwrap();

        app.apply(MenuAction::CopyPath);
        assert!(app.clipboard.as_deref().unwrap().ends_with("sheet.fol"));
        assert_eq!(app.status_text(), Some("Path copied to clipboard"));
    }

    #[test]
    fn window_title_tracks_show_path_setting() {
        let (mut app, dir) = app();
        let path = dir.path().join("sheet.fol");
        fs::write(&path, "x").unwrap();
        app.workspace.open(&path).unwrap();

        app.settings.show_path = false;
        assert_eq!(app.window_title(), "sheet.fol - Folio");

        app.settings.show_path = true;
        assert!(app.window_title().contains(dir.path().to_str().unwrap())
            || app.window_title().starts_with('~'));

        app.workspace.close_all();
        assert_eq!(app.window_title(), "Folio");
    }

    #[test]
    fn session_round_trips_open_documents() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("config");
        let path = dir.path().join("sheet.fol");
        fs::write(&path, "x").unwrap();

        {
            let mut app = App::new(ConfigStore::new(config_dir.clone()));
            app.workspace.open(&path).unwrap();
            app.persist();
        }

        let mut app = App::new(ConfigStore::new(config_dir));
        app.restore_session();
        assert_eq!(app.workspace.len(), 1);
        assert!(app.workspace.active_has_path());
        assert_eq!(app.workspace.recent().len(), 1);
        assert_eq!(app.status_text(), Some("Ready"));
    }
}
