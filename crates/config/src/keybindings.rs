//! Key chord assignments, overridable via `keybindings.toml`.
//!
//! The config layer only deals in strings; the frontend parses chords into
//! its own key event type and ignores anything it cannot parse.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Actions a user may rebind, with their default chords.
pub const DEFAULT_BINDINGS: &[(&str, &str)] = &[
    ("new", "ctrl+n"),
    ("open", "ctrl+o"),
    ("save", "ctrl+s"),
    ("save-as", "ctrl+shift+s"),
    ("save-all", "ctrl+l"),
    ("close", "ctrl+w"),
    ("quit", "ctrl+q"),
    ("toggle-menubar", "ctrl+m"),
    ("toggle-fullscreen", "f11"),
];

#[derive(Debug, Deserialize)]
struct KeybindingsFile {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Action-name to chord-string map.
#[derive(Debug, Clone)]
pub struct Keybindings {
    bindings: HashMap<String, String>,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self {
            bindings: DEFAULT_BINDINGS
                .iter()
                .map(|(action, chord)| (action.to_string(), chord.to_string()))
                .collect(),
        }
    }
}

impl Keybindings {
    /// Apply overrides from a user file. Missing file is fine; unknown
    /// action names are skipped with a warning.
    pub fn merge_user_file(&mut self, path: &Path) {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return,
        };

        let file: KeybindingsFile = match toml::from_str(&contents) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("error parsing {}: {}; keeping defaults", path.display(), e);
                return;
            }
        };

        for (action, chord) in file.bindings {
            if DEFAULT_BINDINGS.iter().any(|(name, _)| *name == action) {
                self.bindings.insert(action, chord);
            } else {
                log::warn!("unknown action {:?} in {}", action, path.display());
            }
        }
    }

    pub fn chord_for(&self, action: &str) -> Option<&str> {
        self.bindings.get(action).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(action, chord)| (action.as_str(), chord.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_actions() {
        let bindings = Keybindings::default();
        for (action, chord) in DEFAULT_BINDINGS {
            assert_eq!(bindings.chord_for(action), Some(*chord));
        }
    }

    #[test]
    fn user_file_overrides_known_actions_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keybindings.toml");
        fs::write(
            &path,
            "[bindings]\nsave = \"ctrl+shift+w\"\nfrobnicate = \"ctrl+x\"\n",
        )
        .unwrap();

        let mut bindings = Keybindings::default();
        bindings.merge_user_file(&path);
        assert_eq!(bindings.chord_for("save"), Some("ctrl+shift+w"));
        assert_eq!(bindings.chord_for("frobnicate"), None);
        // Untouched actions keep their defaults.
        assert_eq!(bindings.chord_for("open"), Some("ctrl+o"));
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut bindings = Keybindings::default();
        bindings.merge_user_file(&dir.path().join("keybindings.toml"));
        assert_eq!(bindings.chord_for("quit"), Some("ctrl+q"));
    }
}
