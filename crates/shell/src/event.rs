use std::path::PathBuf;

use folio_core::DocumentId;

/// Workspace change notifications.
///
/// Every mutation pushes onto the workspace's queue in the order it
/// happened; the UI thread drains the queue after each dispatch. Dispatch
/// is synchronous, so observers always see a consistent workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    /// A fresh untitled document was added.
    DocumentCreated(DocumentId),
    /// A document was loaded from disk and added.
    DocumentOpened(DocumentId),
    /// A document was written to its backing file.
    DocumentSaved(DocumentId),
    /// A copy was written without re-pointing the document.
    DocumentCopySaved(DocumentId, PathBuf),
    /// The backing path changed (save-as or rename).
    DocumentPathChanged(DocumentId),
    /// The modified flag flipped.
    DocumentModifiedChanged(DocumentId, bool),
    /// A document left the workspace.
    DocumentClosed(DocumentId),
    /// The active document changed (None when the last one closed).
    DocumentActivated(Option<DocumentId>),
    /// The number of open documents changed.
    DocumentCountChanged(usize),
    /// The recent-document list changed.
    RecentListChanged,
}
