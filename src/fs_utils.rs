//! Filesystem utility functions
//!
//! Whole-file reads and crash-safe whole-file writes for the INI files.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{ProfileError, Result};

/// Read a file to a string, returning `None` if it does not exist
pub fn read_text(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ProfileError::io(path, err)),
    }
}

/// Replace the contents of `path` with `content`.
///
/// The new content is written to a temporary file next to the target and then
/// renamed over it, so readers see either the old or the new file. Existing
/// permissions are carried over and symlinks are written through.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = resolve_symlink(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|e| ProfileError::io(&dir, e))?;

    let mut temp = NamedTempFile::new_in(&dir).map_err(|e| ProfileError::io(&dir, e))?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| ProfileError::io(temp.path(), e))?;

    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| ProfileError::io(&target, e))?;
    }

    temp.persist(&target)
        .map_err(|e| ProfileError::io(&target, e.error))?;
    Ok(())
}

fn resolve_symlink(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}
