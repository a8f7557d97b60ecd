// Application settings
// Loaded from ~/.config/folio/settings.json

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// How toolbar buttons render their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolButtonStyle {
    /// Short label only (the terminal stand-in for icon-only)
    IconOnly,
    /// Full text label only
    TextOnly,
    /// Short label followed by the full text
    TextBesideIcon,
    /// Follow the theme default
    #[default]
    FollowStyle,
}

/// Where the document tab bar sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPosition {
    #[default]
    Top,
    Bottom,
}

/// Toolbar categories, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCategory {
    Application,
    Document,
    Edit,
    View,
    Format,
    Tools,
    Settings,
    Help,
}

impl ToolbarCategory {
    pub const ALL: [ToolbarCategory; 8] = [
        ToolbarCategory::Application,
        ToolbarCategory::Document,
        ToolbarCategory::Edit,
        ToolbarCategory::View,
        ToolbarCategory::Format,
        ToolbarCategory::Tools,
        ToolbarCategory::Settings,
        ToolbarCategory::Help,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarCategory::Application => "Application",
            ToolbarCategory::Document => "Document",
            ToolbarCategory::Edit => "Edit",
            ToolbarCategory::View => "View",
            ToolbarCategory::Format => "Format",
            ToolbarCategory::Tools => "Tools",
            ToolbarCategory::Settings => "Settings",
            ToolbarCategory::Help => "Help",
        }
    }
}

/// Per-category toolbar visibility plus the shared button style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarSettings {
    pub application: bool,
    pub document: bool,
    pub edit: bool,
    pub view: bool,
    pub format: bool,
    pub tools: bool,
    pub settings: bool,
    pub help: bool,

    #[serde(rename = "buttonStyle")]
    pub button_style: ToolButtonStyle,
}

impl Default for ToolbarSettings {
    fn default() -> Self {
        Self {
            application: true,
            document: true,
            edit: true,
            view: true,
            format: true,
            tools: true,
            settings: false,
            help: false,
            button_style: ToolButtonStyle::default(),
        }
    }
}

impl ToolbarSettings {
    pub fn visible(&self, category: ToolbarCategory) -> bool {
        match category {
            ToolbarCategory::Application => self.application,
            ToolbarCategory::Document => self.document,
            ToolbarCategory::Edit => self.edit,
            ToolbarCategory::View => self.view,
            ToolbarCategory::Format => self.format,
            ToolbarCategory::Tools => self.tools,
            ToolbarCategory::Settings => self.settings,
            ToolbarCategory::Help => self.help,
        }
    }

    pub fn set_visible(&mut self, category: ToolbarCategory, visible: bool) {
        match category {
            ToolbarCategory::Application => self.application = visible,
            ToolbarCategory::Document => self.document = visible,
            ToolbarCategory::Edit => self.edit = visible,
            ToolbarCategory::View => self.view = visible,
            ToolbarCategory::Format => self.format = visible,
            ToolbarCategory::Tools => self.tools = visible,
            ToolbarCategory::Settings => self.settings = visible,
            ToolbarCategory::Help => self.help = visible,
        }
    }

    pub fn toggle(&mut self, category: ToolbarCategory) {
        let visible = self.visible(category);
        self.set_visible(category, !visible);
    }
}

/// Document tab bar preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabSettings {
    pub position: TabPosition,

    /// Hide the tab bar while at most one document is open.
    #[serde(rename = "autoHide")]
    pub auto_hide: bool,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            position: TabPosition::Top,
            auto_hide: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // UI
    #[serde(rename = "ui.showPath")]
    pub show_path: bool,

    #[serde(rename = "ui.showMenuBar")]
    pub show_menu_bar: bool,

    #[serde(rename = "ui.showStatusBar")]
    pub show_status_bar: bool,

    #[serde(rename = "ui.showTabBar")]
    pub show_tab_bar: bool,

    // Tabs
    #[serde(rename = "tab", default)]
    pub tab: TabSettings,

    // Toolbars
    #[serde(rename = "toolbar", default)]
    pub toolbar: ToolbarSettings,

    // File
    #[serde(rename = "file.recentDocumentsLimit")]
    pub recent_documents_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // UI
            show_path: true,
            show_menu_bar: true,
            show_status_bar: true,
            show_tab_bar: true,
            // Tabs
            tab: TabSettings::default(),
            // Toolbars
            toolbar: ToolbarSettings::default(),
            // File
            recent_documents_limit: 10,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults.
    ///
    /// A missing file is first run: a commented default file is written so
    /// users have something to edit.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            settings.create_default_file(path);
            return settings;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Strip comments (lines starting with //)
                let cleaned: String = contents
                    .lines()
                    .filter(|line| !line.trim().starts_with("//"))
                    .collect::<Vec<_>>()
                    .join("\n");

                match serde_json::from_str(&cleaned) {
                    Ok(settings) => settings,
                    Err(e) => {
                        log::warn!("error parsing {}: {}; using defaults", path.display(), e);
                        Self::default()
                    }
                }
            }
            Err(e) => {
                log::warn!("error reading {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save current settings to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;

        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Write the default settings file with comments.
    fn create_default_file(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("error creating config directory: {}", e);
                return;
            }
        }

        let default_config = r#"{
    // Window chrome
    "ui.showPath": true,
    "ui.showMenuBar": true,
    "ui.showStatusBar": true,
    "ui.showTabBar": true,

    // Document tab bar ("top" or "bottom"; autoHide hides it
    // while at most one document is open)
    "tab": {
        "position": "top",
        "autoHide": false
    },

    // Toolbars per category, plus button label style
    // ("icon-only", "text-only", "text-beside-icon", "follow-style")
    "toolbar": {
        "application": true,
        "document": true,
        "edit": true,
        "view": true,
        "format": true,
        "tools": true,
        "settings": false,
        "help": false,
        "buttonStyle": "follow-style"
    },

    // Recent-document list bound
    "file.recentDocumentsLimit": 10
}
"#;

        if let Err(e) = fs::write(path, default_config) {
            log::warn!("error writing default {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run_chrome() {
        let settings = Settings::default();
        assert!(settings.show_menu_bar);
        assert!(settings.show_status_bar);
        assert!(settings.show_tab_bar);
        assert!(settings.toolbar.visible(ToolbarCategory::Application));
        assert!(!settings.toolbar.visible(ToolbarCategory::Settings));
        assert!(!settings.toolbar.visible(ToolbarCategory::Help));
        assert_eq!(settings.recent_documents_limit, 10);
    }

    #[test]
    fn missing_file_creates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings::load_from(&path);
        assert!(settings.show_menu_bar);
        assert!(path.exists());

        // The generated file parses back to the same defaults.
        let reloaded = Settings::load_from(&path);
        assert_eq!(
            reloaded.recent_documents_limit,
            Settings::default().recent_documents_limit
        );
        assert_eq!(reloaded.tab.position, TabPosition::Top);
    }

    #[test]
    fn round_trip_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.show_menu_bar = false;
        settings.tab.position = TabPosition::Bottom;
        settings.toolbar.set_visible(ToolbarCategory::Help, true);
        settings.toolbar.button_style = ToolButtonStyle::TextOnly;
        settings.save_to(&path).unwrap();

        let reloaded = Settings::load_from(&path);
        assert!(!reloaded.show_menu_bar);
        assert_eq!(reloaded.tab.position, TabPosition::Bottom);
        assert!(reloaded.toolbar.visible(ToolbarCategory::Help));
        assert_eq!(reloaded.toolbar.button_style, ToolButtonStyle::TextOnly);
    }

    #[test]
    fn unparseable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let settings = Settings::load_from(&path);
        assert!(settings.show_menu_bar);
    }

    #[test]
    fn comment_lines_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            "{\n// chrome\n\"ui.showMenuBar\": false\n}\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert!(!settings.show_menu_bar);
        // Unspecified fields keep their defaults.
        assert!(settings.show_status_bar);
    }
}
