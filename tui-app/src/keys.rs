//! Chord parsing and the action keymap.
//!
//! Chords come from `folio-config` as strings ("ctrl+shift+s", "f11");
//! this module turns them into crossterm key matches. Unparseable chords
//! are dropped with a warning so a bad `keybindings.toml` can never take
//! the whole keymap down.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_config::Keybindings;

use crate::menu_model::MenuAction;

fn action_for_name(name: &str) -> Option<MenuAction> {
    Some(match name {
        "new" => MenuAction::New,
        "open" => MenuAction::Open,
        "save" => MenuAction::Save,
        "save-as" => MenuAction::SaveAs,
        "save-all" => MenuAction::SaveAll,
        "close" => MenuAction::Close,
        "quit" => MenuAction::Quit,
        "toggle-menubar" => MenuAction::ShowMenubar,
        "toggle-fullscreen" => MenuAction::FullScreen,
        _ => return None,
    })
}

/// Parse a chord string into modifiers plus a key code.
pub fn parse_chord(chord: &str) -> Option<(KeyModifiers, KeyCode)> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code = None;

    for part in chord.split('+') {
        let part = part.trim().to_ascii_lowercase();
        match part.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            "esc" => code = Some(KeyCode::Esc),
            "enter" => code = Some(KeyCode::Enter),
            "tab" => code = Some(KeyCode::Tab),
            key if key.chars().count() == 1 => {
                code = Some(KeyCode::Char(key.chars().next().unwrap()))
            }
            key if key.starts_with('f') => {
                let n: u8 = key[1..].parse().ok()?;
                if n == 0 || n > 12 {
                    return None;
                }
                code = Some(KeyCode::F(n));
            }
            _ => return None,
        }
    }

    code.map(|code| (modifiers, code))
}

/// Character keys compare case-insensitively; shift state comes from the
/// modifier flags alone.
fn normalize(key: &KeyEvent) -> (KeyModifiers, KeyCode) {
    match key.code {
        KeyCode::Char(c) => (key.modifiers, KeyCode::Char(c.to_ascii_lowercase())),
        code => (key.modifiers, code),
    }
}

/// Resolved key-event to action table.
pub struct KeyMap {
    entries: Vec<(KeyModifiers, KeyCode, MenuAction)>,
}

impl KeyMap {
    pub fn from_bindings(bindings: &Keybindings) -> Self {
        let mut entries = Vec::new();
        for (name, chord) in bindings.iter() {
            let Some(action) = action_for_name(name) else {
                log::warn!("no action named {:?}", name);
                continue;
            };
            match parse_chord(chord) {
                Some((modifiers, code)) => entries.push((modifiers, code, action)),
                None => log::warn!("unparseable chord {:?} for action {:?}", chord, name),
            }
        }
        Self { entries }
    }

    pub fn lookup(&self, key: &KeyEvent) -> Option<MenuAction> {
        let (modifiers, code) = normalize(key);
        self.entries
            .iter()
            .find(|(m, c, _)| *m == modifiers && *c == code)
            .map(|(_, _, action)| *action)
    }
}
