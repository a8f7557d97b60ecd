use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use folio_core::{Document, DocumentId};

use crate::error::ShellError;
use crate::event::WorkspaceEvent;
use crate::recent::RecentDocumentList;

/// The document host: every open document, the active one, and the recent
/// list. All mutations are reported on the event queue in call order.
pub struct Workspace {
    documents: Vec<Document>,
    active: Option<usize>,
    next_id: u64,
    recent: RecentDocumentList,
    events: Vec<WorkspaceEvent>,
}

impl Workspace {
    pub fn new(recent_limit: usize) -> Self {
        Self {
            documents: Vec::new(),
            active: None,
            next_id: 1,
            recent: RecentDocumentList::new(recent_limit),
            events: Vec::new(),
        }
    }

    //
    // Events
    //

    fn push_event(&mut self, event: WorkspaceEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<WorkspaceEvent> {
        std::mem::take(&mut self.events)
    }

    //
    // Enumeration
    //

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_ids(&self) -> Vec<DocumentId> {
        self.documents.iter().map(Document::id).collect()
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.index_of(id).map(|i| &self.documents[i])
    }

    fn index_of(&self, id: DocumentId) -> Option<usize> {
        self.documents.iter().position(|d| d.id() == id)
    }

    pub fn find_by_path(&self, path: &Path) -> Option<DocumentId> {
        self.documents
            .iter()
            .find(|d| d.path() == Some(path))
            .map(Document::id)
    }

    //
    // Activation
    //

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active.map(|i| self.documents[i].id())
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.map(|i| &self.documents[i])
    }

    pub fn has_active_document(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_has_path(&self) -> bool {
        self.active_document().is_some_and(Document::has_path)
    }

    /// "Close others" only makes sense with at least two open documents.
    pub fn close_other_enabled(&self) -> bool {
        self.documents.len() >= 2
    }

    pub fn activate(&mut self, id: DocumentId) -> bool {
        match self.index_of(id) {
            Some(index) if self.active != Some(index) => {
                self.active = Some(index);
                self.push_event(WorkspaceEvent::DocumentActivated(Some(id)));
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Activate the next document in tab order, wrapping around.
    pub fn activate_next(&mut self) {
        if let Some(index) = self.active {
            let next = (index + 1) % self.documents.len();
            let id = self.documents[next].id();
            self.activate(id);
        }
    }

    /// Activate the previous document in tab order, wrapping around.
    pub fn activate_previous(&mut self) {
        if let Some(index) = self.active {
            let count = self.documents.len();
            let prev = (index + count - 1) % count;
            let id = self.documents[prev].id();
            self.activate(id);
        }
    }

    //
    // Sequence numbering
    //

    /// Assign the document at `index` its filename sequence number: one
    /// more than the highest number among open documents sharing its file
    /// name. Untitled documents (no file name) number among themselves.
    /// Freed numbers are never reclaimed.
    fn assign_sequence_number(&mut self, index: usize) {
        self.documents[index].set_sequence_number(0);
        let file_name = self.documents[index].file_name().map(OsStr::to_os_string);
        let latest = self
            .documents
            .iter()
            .filter(|d| d.file_name() == file_name.as_deref())
            .map(Document::sequence_number)
            .max()
            .unwrap_or(0);
        self.documents[index].set_sequence_number(latest + 1);
    }

    //
    // Document lifecycle
    //

    fn alloc_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create an untitled placeholder document and activate it.
    pub fn new_untitled(&mut self) -> DocumentId {
        let id = self.alloc_id();
        self.documents.push(Document::untitled(id));
        let index = self.documents.len() - 1;
        self.assign_sequence_number(index);
        self.active = Some(index);

        self.push_event(WorkspaceEvent::DocumentCreated(id));
        self.push_event(WorkspaceEvent::DocumentCountChanged(self.documents.len()));
        self.push_event(WorkspaceEvent::DocumentActivated(Some(id)));

        log::info!("created untitled document {:?}", id);
        self.debug_check_invariants();
        id
    }

    /// Open `path`, or activate the document that already has it open.
    pub fn open(&mut self, path: impl Into<PathBuf>) -> Result<DocumentId, ShellError> {
        let path = path.into();
        let path = fs::canonicalize(&path).unwrap_or(path);

        if let Some(existing) = self.find_by_path(&path) {
            self.activate(existing);
            log::info!("{} already open, activated {:?}", path.display(), existing);
            return Ok(existing);
        }

        let contents = fs::read(&path).map_err(|e| ShellError::io(&path, e))?;

        let id = self.alloc_id();
        self.documents
            .push(Document::from_file(id, path.clone(), contents));
        let index = self.documents.len() - 1;
        self.assign_sequence_number(index);
        self.active = Some(index);
        self.recent.add(path.clone());

        self.push_event(WorkspaceEvent::DocumentOpened(id));
        self.push_event(WorkspaceEvent::DocumentCountChanged(self.documents.len()));
        self.push_event(WorkspaceEvent::DocumentActivated(Some(id)));
        self.push_event(WorkspaceEvent::RecentListChanged);

        log::info!("opened {} as {:?}", path.display(), id);
        self.debug_check_invariants();
        Ok(id)
    }

    /// Write the document back to its file. Untitled documents need
    /// `save_as` instead.
    pub fn save(&mut self, id: DocumentId) -> Result<(), ShellError> {
        let index = self.index_of(id).ok_or(ShellError::UnknownDocument)?;
        let path = self.documents[index]
            .path()
            .ok_or(ShellError::UntitledDocument)?
            .to_path_buf();

        fs::write(&path, self.documents[index].contents())
            .map_err(|e| ShellError::io(&path, e))?;

        if self.documents[index].set_modified(false) {
            self.push_event(WorkspaceEvent::DocumentModifiedChanged(id, false));
        }
        self.push_event(WorkspaceEvent::DocumentSaved(id));

        log::info!("saved {:?} to {}", id, path.display());
        Ok(())
    }

    /// Write to `path` and re-point the document at it.
    pub fn save_as(&mut self, id: DocumentId, path: PathBuf) -> Result<(), ShellError> {
        let index = self.index_of(id).ok_or(ShellError::UnknownDocument)?;

        fs::write(&path, self.documents[index].contents())
            .map_err(|e| ShellError::io(&path, e))?;
        let path = fs::canonicalize(&path).unwrap_or(path);

        self.documents[index].set_path(path.clone());
        self.assign_sequence_number(index);
        self.recent.add(path.clone());

        self.push_event(WorkspaceEvent::DocumentPathChanged(id));
        if self.documents[index].set_modified(false) {
            self.push_event(WorkspaceEvent::DocumentModifiedChanged(id, false));
        }
        self.push_event(WorkspaceEvent::DocumentSaved(id));
        self.push_event(WorkspaceEvent::RecentListChanged);

        log::info!("saved {:?} as {}", id, path.display());
        self.debug_check_invariants();
        Ok(())
    }

    /// Write a copy to `path`; the document keeps its identity and
    /// modified state.
    pub fn save_copy_as(&mut self, id: DocumentId, path: PathBuf) -> Result<(), ShellError> {
        let index = self.index_of(id).ok_or(ShellError::UnknownDocument)?;

        fs::write(&path, self.documents[index].contents())
            .map_err(|e| ShellError::io(&path, e))?;

        self.push_event(WorkspaceEvent::DocumentCopySaved(id, path.clone()));
        log::info!("saved copy of {:?} to {}", id, path.display());
        Ok(())
    }

    /// Save every document that has a backing file. Returns the untitled
    /// documents that still need a path from the user.
    pub fn save_all(&mut self) -> Result<Vec<DocumentId>, ShellError> {
        let mut untitled = Vec::new();
        for id in self.document_ids() {
            if self.document(id).is_some_and(Document::has_path) {
                self.save(id)?;
            } else {
                untitled.push(id);
            }
        }
        Ok(untitled)
    }

    /// Rename the backing file in place. Refuses to overwrite an existing
    /// target and reports it as a collision.
    pub fn rename(&mut self, id: DocumentId, new_name: &str) -> Result<(), ShellError> {
        let index = self.index_of(id).ok_or(ShellError::UnknownDocument)?;
        let old_path = self.documents[index]
            .path()
            .ok_or(ShellError::UntitledDocument)?
            .to_path_buf();

        let new_name = new_name.trim();
        if new_name.is_empty()
            || old_path.file_name() == Some(OsStr::new(new_name))
        {
            return Ok(());
        }

        let new_path = old_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(new_name);

        // fs::rename replaces an existing target on Unix, so the collision
        // has to be detected up front.
        if new_path.exists() {
            return Err(ShellError::FileExists(new_path));
        }

        fs::rename(&old_path, &new_path).map_err(|e| ShellError::io(&old_path, e))?;

        self.documents[index].set_path(new_path.clone());
        self.assign_sequence_number(index);
        self.recent.add(new_path.clone());

        self.push_event(WorkspaceEvent::DocumentPathChanged(id));
        self.push_event(WorkspaceEvent::RecentListChanged);

        log::info!(
            "renamed {} to {}",
            old_path.display(),
            new_path.display()
        );
        self.debug_check_invariants();
        Ok(())
    }

    /// Remove a document from the workspace. Returns false for an unknown
    /// id. The neighbouring document (if any) becomes active.
    pub fn close(&mut self, id: DocumentId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.documents.remove(index);

        self.active = match self.active {
            Some(_) if self.documents.is_empty() => None,
            Some(active) if active > index => Some(active - 1),
            Some(active) if active == index => Some(index.min(self.documents.len() - 1)),
            other => other,
        };

        self.push_event(WorkspaceEvent::DocumentClosed(id));
        self.push_event(WorkspaceEvent::DocumentCountChanged(self.documents.len()));
        self.push_event(WorkspaceEvent::DocumentActivated(self.active_id()));

        log::info!("closed {:?}, {} remaining", id, self.documents.len());
        self.debug_check_invariants();
        true
    }

    /// Close every document except `keep`. Returns how many closed.
    pub fn close_others(&mut self, keep: DocumentId) -> usize {
        let others: Vec<DocumentId> = self
            .documents
            .iter()
            .map(Document::id)
            .filter(|id| *id != keep)
            .collect();
        let count = others.len();
        for id in others {
            self.close(id);
        }
        count
    }

    /// Close every document. Returns how many closed.
    pub fn close_all(&mut self) -> usize {
        let all = self.document_ids();
        let count = all.len();
        for id in all {
            self.close(id);
        }
        count
    }

    //
    // Modified flag
    //

    pub fn set_modified(&mut self, id: DocumentId, modified: bool) {
        if let Some(index) = self.index_of(id) {
            if self.documents[index].set_modified(modified) {
                self.push_event(WorkspaceEvent::DocumentModifiedChanged(id, modified));
            }
        }
    }

    pub fn any_modified(&self) -> bool {
        self.documents.iter().any(Document::modified)
    }

    //
    // Paths for the clipboard
    //

    pub fn path_text(&self, id: DocumentId) -> Option<String> {
        self.document(id)?.path().map(|p| p.display().to_string())
    }

    pub fn filename_text(&self, id: DocumentId) -> Option<String> {
        self.document(id)?
            .file_name()
            .and_then(OsStr::to_str)
            .map(str::to_string)
    }

    //
    // Recent documents
    //

    pub fn recent(&self) -> &RecentDocumentList {
        &self.recent
    }

    pub fn restore_recent(&mut self, paths: Vec<PathBuf>) {
        self.recent.restore(paths);
        self.push_event(WorkspaceEvent::RecentListChanged);
    }

    pub fn clear_recent(&mut self) {
        self.recent.clear();
        self.push_event(WorkspaceEvent::RecentListChanged);
    }

    pub fn set_recent_limit(&mut self, maximum: usize) {
        self.recent.set_maximum(maximum);
        self.push_event(WorkspaceEvent::RecentListChanged);
    }

    //
    // Titles
    //

    /// Application window title for the active document, or None with no
    /// documents open.
    pub fn window_title(&self, path_visible: bool) -> Option<String> {
        self.active_document().map(|d| d.display_title(path_visible))
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        let mut seen = std::collections::HashSet::new();
        for document in &self.documents {
            debug_assert!(
                seen.insert(document.id()),
                "workspace invariant violation: duplicate document id"
            );
        }
        if let Some(active) = self.active {
            debug_assert!(
                active < self.documents.len(),
                "workspace invariant violation: active index out of range"
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn workspace() -> Workspace {
        Workspace::new(10)
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn untitled_documents_number_among_themselves() {
        let mut ws = workspace();
        let a = ws.new_untitled();
        let b = ws.new_untitled();
        let c = ws.new_untitled();

        assert_eq!(ws.document(a).unwrap().caption(false), "Untitled");
        assert_eq!(ws.document(b).unwrap().caption(false), "Untitled (2)");
        assert_eq!(ws.document(c).unwrap().caption(false), "Untitled (3)");
    }

    #[test]
    fn sequence_numbers_are_max_plus_one_never_reused() {
        let mut ws = workspace();
        let _a = ws.new_untitled();
        let b = ws.new_untitled();
        let _c = ws.new_untitled();

        // Closing (2) frees nothing: the next document gets max(1, 3) + 1.
        ws.close(b);
        let d = ws.new_untitled();
        assert_eq!(ws.document(d).unwrap().sequence_number(), 4);
        assert_eq!(ws.document(d).unwrap().caption(false), "Untitled (4)");
    }

    #[test]
    fn same_file_name_in_different_directories_collides() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("one")).unwrap();
        fs::create_dir(dir.path().join("two")).unwrap();
        let first = write_file(&dir, "one/sheet.fol", "x");
        let second = write_file(&dir, "two/sheet.fol", "y");

        let mut ws = workspace();
        let a = ws.open(first).unwrap();
        let b = ws.open(second).unwrap();

        assert_eq!(ws.document(a).unwrap().caption(false), "sheet.fol");
        assert_eq!(ws.document(b).unwrap().caption(false), "sheet.fol (2)");
    }

    #[test]
    fn open_loads_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "sheet.fol", "cells");

        let mut ws = workspace();
        let id = ws.open(path).unwrap();
        assert_eq!(ws.document(id).unwrap().contents(), b"cells");
        assert!(!ws.document(id).unwrap().modified());
    }

    #[test]
    fn open_same_path_twice_activates_instead() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "sheet.fol", "x");

        let mut ws = workspace();
        let a = ws.open(&path).unwrap();
        let _b = ws.new_untitled();
        let again = ws.open(&path).unwrap();

        assert_eq!(a, again);
        assert_eq!(ws.len(), 2);
        assert_eq!(ws.active_id(), Some(a));
    }

    #[test]
    fn open_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = workspace();
        let err = ws.open(dir.path().join("absent.fol")).unwrap_err();
        assert!(matches!(err, ShellError::Io { .. }));
        assert!(ws.is_empty());
    }

    #[test]
    fn save_untitled_requires_a_path() {
        let mut ws = workspace();
        let id = ws.new_untitled();
        assert!(matches!(ws.save(id), Err(ShellError::UntitledDocument)));
    }

    #[test]
    fn save_writes_and_clears_modified() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "sheet.fol", "before");

        let mut ws = workspace();
        let id = ws.open(&path).unwrap();
        ws.set_modified(id, true);
        ws.save(id).unwrap();

        assert!(!ws.document(id).unwrap().modified());
        assert_eq!(fs::read_to_string(&path).unwrap(), "before");
    }

    #[test]
    fn save_as_repoints_and_renumbers() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = workspace();
        let id = ws.new_untitled();
        ws.set_modified(id, true);

        let target = dir.path().join("fresh.fol");
        ws.save_as(id, target.clone()).unwrap();

        let doc = ws.document(id).unwrap();
        assert!(doc.path().is_some());
        assert_eq!(doc.caption(false), "fresh.fol");
        assert!(!doc.modified());
        assert!(target.exists());
        assert_eq!(ws.recent().get(0), Some(&*fs::canonicalize(&target).unwrap()));
    }

    #[test]
    fn save_copy_keeps_identity_and_modified_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "sheet.fol", "x");

        let mut ws = workspace();
        let id = ws.open(&path).unwrap();
        ws.set_modified(id, true);

        let copy = dir.path().join("copy.fol");
        ws.save_copy_as(id, copy.clone()).unwrap();

        let doc = ws.document(id).unwrap();
        assert_eq!(doc.file_name(), Some(OsStr::new("sheet.fol")));
        assert!(doc.modified());
        assert!(copy.exists());
    }

    #[test]
    fn save_all_reports_untitled_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "sheet.fol", "x");

        let mut ws = workspace();
        let _saved = ws.open(&path).unwrap();
        let untitled = ws.new_untitled();

        let left_over = ws.save_all().unwrap();
        assert_eq!(left_over, vec![untitled]);
    }

    #[test]
    fn rename_moves_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "old.fol", "x");

        let mut ws = workspace();
        let id = ws.open(&path).unwrap();
        ws.rename(id, "new.fol").unwrap();

        assert!(!path.exists());
        assert!(dir.path().join("new.fol").exists());
        assert_eq!(ws.document(id).unwrap().caption(false), "new.fol");
    }

    #[test]
    fn rename_collision_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "old.fol", "x");
        write_file(&dir, "taken.fol", "y");

        let mut ws = workspace();
        let id = ws.open(&path).unwrap();
        let err = ws.rename(id, "taken.fol").unwrap_err();

        assert!(matches!(err, ShellError::FileExists(_)));
        // Nothing moved, nothing re-pointed.
        assert!(path.exists());
        assert_eq!(ws.document(id).unwrap().file_name(), Some(OsStr::new("old.fol")));
        assert_eq!(fs::read_to_string(dir.path().join("taken.fol")).unwrap(), "y");
    }

    #[test]
    fn rename_to_same_name_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "same.fol", "x");

        let mut ws = workspace();
        let id = ws.open(&path).unwrap();
        ws.rename(id, "same.fol").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rename_untitled_is_rejected() {
        let mut ws = workspace();
        let id = ws.new_untitled();
        assert!(matches!(
            ws.rename(id, "name.fol"),
            Err(ShellError::UntitledDocument)
        ));
    }

    #[test]
    fn close_reassigns_active_to_neighbour() {
        let mut ws = workspace();
        let a = ws.new_untitled();
        let b = ws.new_untitled();
        let c = ws.new_untitled();

        ws.activate(b);
        assert!(ws.close(b));
        // The document that slid into b's slot becomes active.
        assert_eq!(ws.active_id(), Some(c));

        ws.close(c);
        assert_eq!(ws.active_id(), Some(a));
        ws.close(a);
        assert_eq!(ws.active_id(), None);
        assert!(ws.is_empty());
    }

    #[test]
    fn close_unknown_id_is_false() {
        let mut ws = workspace();
        let id = ws.new_untitled();
        ws.close(id);
        assert!(!ws.close(id));
    }

    #[test]
    fn close_others_keeps_only_the_given_document() {
        let mut ws = workspace();
        let _a = ws.new_untitled();
        let b = ws.new_untitled();
        let _c = ws.new_untitled();

        assert!(ws.close_other_enabled());
        assert_eq!(ws.close_others(b), 2);
        assert_eq!(ws.len(), 1);
        assert_eq!(ws.active_id(), Some(b));
        assert!(!ws.close_other_enabled());
    }

    #[test]
    fn close_all_empties_the_workspace() {
        let mut ws = workspace();
        ws.new_untitled();
        ws.new_untitled();
        assert_eq!(ws.close_all(), 2);
        assert!(ws.is_empty());
        assert_eq!(ws.active_id(), None);
    }

    #[test]
    fn activate_next_and_previous_wrap() {
        let mut ws = workspace();
        let a = ws.new_untitled();
        let b = ws.new_untitled();
        let c = ws.new_untitled();

        assert_eq!(ws.active_id(), Some(c));
        ws.activate_next();
        assert_eq!(ws.active_id(), Some(a));
        ws.activate_previous();
        assert_eq!(ws.active_id(), Some(c));
        ws.activate_previous();
        assert_eq!(ws.active_id(), Some(b));
    }

    #[test]
    fn events_are_emitted_in_call_order() {
        let mut ws = workspace();
        let id = ws.new_untitled();

        let events = ws.drain_events();
        assert_eq!(
            events,
            vec![
                WorkspaceEvent::DocumentCreated(id),
                WorkspaceEvent::DocumentCountChanged(1),
                WorkspaceEvent::DocumentActivated(Some(id)),
            ]
        );
        // The queue drains fully.
        assert!(ws.drain_events().is_empty());
    }

    #[test]
    fn modified_events_fire_on_change_only() {
        let mut ws = workspace();
        let id = ws.new_untitled();
        ws.drain_events();

        ws.set_modified(id, true);
        ws.set_modified(id, true);
        ws.set_modified(id, false);

        let events = ws.drain_events();
        assert_eq!(
            events,
            vec![
                WorkspaceEvent::DocumentModifiedChanged(id, true),
                WorkspaceEvent::DocumentModifiedChanged(id, false),
            ]
        );
    }

    #[test]
    fn recent_list_tracks_opens_in_mru_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(&dir, "first.fol", "1");
        let second = write_file(&dir, "second.fol", "2");

        let mut ws = workspace();
        ws.open(&first).unwrap();
        ws.open(&second).unwrap();

        let recents: Vec<_> = ws.recent().iter().collect();
        assert_eq!(recents[0].file_name(), Some(OsStr::new("second.fol")));
        assert_eq!(recents[1].file_name(), Some(OsStr::new("first.fol")));
    }

    #[test]
    fn window_title_follows_active_document() {
        let mut ws = workspace();
        assert_eq!(ws.window_title(false), None);

        let id = ws.new_untitled();
        assert_eq!(ws.window_title(false).unwrap(), "Untitled");
        ws.set_modified(id, true);
        assert_eq!(ws.window_title(false).unwrap(), "Untitled ●");
    }
}
