//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::{FileSystem, FsError, FsResult};

/// Mode of newly created files, before the umask
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Local file system implementation
///
/// Writes go to a temp file in the target directory which is then renamed
/// over the destination, so a reader never sees a half-written service worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

        // The temp file starts owner-only; the result must stay readable by the web server
        let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        if existing.is_none() {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(NEW_FILE_MODE));
        }
        let mut temp = builder
            .tempfile_in(parent)
            .map_err(|e| FsError::from_io(parent, e))?;
        if let Some(permissions) = existing {
            temp.as_file()
                .set_permissions(permissions)
                .map_err(|e| FsError::from_io(path, e))?;
        }
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.flush())
            .map_err(|e| FsError::from_io(path, e))?;
        temp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
