// Configuration loading

pub mod keybindings;
pub mod session;
pub mod settings;

use std::path::{Path, PathBuf};

pub use keybindings::Keybindings;
pub use session::Session;
pub use settings::{Settings, TabPosition, ToolButtonStyle, ToolbarCategory};

/// Directory-rooted configuration service.
///
/// Constructed once at startup and handed to whoever needs persisted
/// preferences; nothing reads the settings files behind its back. Tests
/// point it at a temp directory.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the platform config directory, e.g.
    /// `~/.config/folio` on Linux.
    pub fn default_location() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio");
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join("settings.json")
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.join("session.json")
    }

    pub fn keybindings_path(&self) -> PathBuf {
        self.dir.join("keybindings.toml")
    }

    /// Load settings, writing a commented default file on first run.
    pub fn load_settings(&self) -> Settings {
        Settings::load_from(&self.settings_path())
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), String> {
        settings.save_to(&self.settings_path())
    }

    pub fn load_session(&self) -> Option<Session> {
        Session::load_from(&self.session_path())
    }

    /// Save session state, stamping the save time.
    pub fn save_session(&self, session: &Session) -> Result<(), String> {
        let mut session = session.clone();
        session.saved_at = Some(chrono::Utc::now());
        session.save_to(&self.session_path())
    }

    /// Default keybindings merged with the user's overrides, if any.
    pub fn load_keybindings(&self) -> Keybindings {
        let mut bindings = Keybindings::default();
        bindings.merge_user_file(&self.keybindings_path());
        bindings
    }
}
