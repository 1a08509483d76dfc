//! Recursive template tree listing.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Recursively lists every regular file under `root`.
///
/// Directories are never emitted; the order of the returned paths is
/// unspecified. One unreadable subdirectory aborts the whole listing.
///
/// # Errors
/// * `Error::List` if any traversed directory cannot be read
pub fn list_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).display().to_string();
            Error::List { path, source: e }
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
