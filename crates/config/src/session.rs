use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last known terminal size, recorded at shutdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct Geometry {
    pub columns: u16,
    pub rows: u16,
}

/// Window and workspace state carried across runs.
///
/// Saved explicitly at shutdown, loaded once at startup. Unknown or missing
/// fields fall back to defaults so older session files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Session {
    pub version: u32,
    pub geometry: Geometry,
    pub full_screen: bool,
    pub open_documents: Vec<PathBuf>,
    pub active_document: Option<usize>,
    pub recent_documents: Vec<PathBuf>,
    pub saved_at: Option<DateTime<Utc>>,
}

impl Session {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Self::default()
        }
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("error parsing {}: {}; starting fresh", path.display(), e);
                None
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Session::load_from(&dir.path().join("session.json")).is_none());
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::new();
        session.geometry = Geometry {
            columns: 120,
            rows: 40,
        };
        session.full_screen = true;
        session.open_documents = vec![PathBuf::from("/data/a.fol"), PathBuf::from("/data/b.fol")];
        session.active_document = Some(1);
        session.recent_documents = vec![PathBuf::from("/data/b.fol")];
        session.saved_at = Some(Utc::now());
        session.save_to(&path).unwrap();

        let reloaded = Session::load_from(&path).unwrap();
        assert_eq!(reloaded.version, Session::CURRENT_VERSION);
        assert_eq!(reloaded.geometry.columns, 120);
        assert!(reloaded.full_screen);
        assert_eq!(reloaded.open_documents.len(), 2);
        assert_eq!(reloaded.active_document, Some(1));
        assert!(reloaded.saved_at.is_some());
    }

    #[test]
    fn garbage_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(Session::load_from(&path).is_none());
    }
}
