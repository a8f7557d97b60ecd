use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced by workspace operations.
#[derive(Debug)]
pub enum ShellError {
    /// The document id does not (or no longer does) refer to an open document.
    UnknownDocument,
    /// The operation needs a backing file but the document is untitled.
    UntitledDocument,
    /// Rename refused: the target file name is already taken.
    FileExists(PathBuf),
    /// Underlying file I/O failed.
    Io { path: PathBuf, source: io::Error },
}

impl ShellError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ShellError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::UnknownDocument => write!(f, "no such open document"),
            ShellError::UntitledDocument => write!(f, "document has no file name"),
            ShellError::FileExists(path) => {
                write!(f, "a file named {:?} already exists", path.display())
            }
            ShellError::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
