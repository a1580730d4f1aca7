//! FileSystem port - abstraction over the writes the emitter performs
//!
//! Lets the emission logic be tested against an in-memory implementation
//! and keeps the "skip unchanged content" rule in one place.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Other I/O error on a path
    Io { path: PathBuf, source: std::io::Error },
}

impl FsError {
    /// Classify an I/O error that happened on `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path) | FsError::PermissionDenied(path) => path,
            FsError::Io { path, .. } => path,
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// What a conditional write did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist
    Created,
    /// The file existed with different content
    Updated,
    /// The file already had this content; nothing was touched
    Unchanged,
}

impl WriteOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, WriteOutcome::Unchanged)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - atomic writes on the local disk
/// - `MemoryFs` (tests) - in-memory map that counts writes
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// Write only when the content differs from what is on disk.
    ///
    /// An unchanged file is not opened for writing, so its modification
    /// time stays put.
    fn write_if_changed(&self, path: &Path, content: &str) -> FsResult<WriteOutcome> {
        let existed = self.exists(path);
        if existed {
            // An unreadable existing file is simply rewritten
            if let Ok(current) = self.read(path) {
                if current == content {
                    return Ok(WriteOutcome::Unchanged);
                }
            }
        }
        self.write(path, content)?;
        Ok(if existed {
            WriteOutcome::Updated
        } else {
            WriteOutcome::Created
        })
    }
}
