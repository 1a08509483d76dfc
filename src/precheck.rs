//! Precondition checks run before any file is written.
//! Validates that the target directory is usable and that the current
//! working tree has no uncommitted changes.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::external;

/// Validates that the target path is usable as a project directory.
///
/// A nonexistent path passes trivially (it is created by a later stage).
/// An existing path must be a directory, must be readable and writable,
/// and must be empty unless `skip_empty_check` is set.
///
/// # Errors
/// * `Error::NotADirectory` if the path exists but is not a directory
/// * `Error::InaccessiblePath` if the path cannot be read or written
/// * `Error::NonEmptyDirectory` if the directory already contains entries
pub fn target_dir<P: AsRef<Path>>(dir: P, skip_empty_check: bool) -> Result<()> {
    let dir = dir.as_ref();
    let metadata = match fs::symlink_metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::Io(e)),
    };

    if !metadata.is_dir() {
        return Err(Error::NotADirectory { path: dir.display().to_string() });
    }

    let entry_count = match fs::read_dir(dir) {
        Ok(entries) => entries.count(),
        Err(_) => {
            return Err(Error::InaccessiblePath { path: dir.display().to_string() })
        }
    };
    if metadata.permissions().readonly() || !is_writable(dir) {
        return Err(Error::InaccessiblePath { path: dir.display().to_string() });
    }

    if !skip_empty_check && entry_count > 0 {
        return Err(Error::NonEmptyDirectory { path: dir.display().to_string() });
    }

    Ok(())
}

/// Probes effective writability by creating and removing a throwaway file.
/// Permission bits alone miss a directory unwritable by the current user
/// but writable by its owner.
fn is_writable(dir: &Path) -> bool {
    let probe = dir.join(".stamp-access-check");
    match fs::OpenOptions::new().write(true).create_new(true).open(&probe) {
        Ok(_) => {
            let _ = fs::remove_file(&probe);
            true
        }
        // The probe name itself was placed there by a writer.
        Err(e) => e.kind() == io::ErrorKind::AlreadyExists,
    }
}

/// Validates that the working tree at `path` has no uncommitted changes.
///
/// Runs `git status --porcelain` and fails with the raw status text if any
/// output is produced. A failure to invoke git at all is treated as a clean
/// tree rather than escalated; version control is not a hard dependency.
pub fn git_status<P: AsRef<Path>>(path: P, skip_status_check: bool) -> Result<()> {
    if skip_status_check {
        return Ok(());
    }
    let status = external::git_status(path.as_ref());
    if !status.is_empty() {
        return Err(Error::DirtyWorkingTree { status });
    }
    Ok(())
}
