//! Filename normalization rules applied after materialization.
//!
//! Template sources obfuscate filenames that package-manager or git tooling
//! would otherwise treat as real configuration (`__eslintrc` instead of
//! `.eslintrc`, `_gitignore` instead of `gitignore`). Once every file is
//! fully written, these rules restore the intended names.

use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A pattern-plus-function pair used to restore intended filenames in one
/// directory.
pub struct RenameRule {
    /// Directory whose entries are scanned
    pub directory: PathBuf,
    /// Filenames matching this pattern are renamed
    pub pattern: Regex,
    /// Computes the destination filename from the matched one
    pub rename: fn(&str) -> String,
}

fn restore_dotfile(name: &str) -> String {
    match name.strip_prefix("__") {
        Some(rest) => format!(".{}", rest),
        None => name.to_string(),
    }
}

fn strip_underscore(name: &str) -> String {
    match name.strip_prefix('_') {
        Some(rest) => rest.to_string(),
        None => name.to_string(),
    }
}

/// The reference rule set for one directory: a leading double underscore
/// becomes a leading dot, then a leading single underscore is stripped.
///
/// The double-prefix rule is listed first so a double-prefixed file is
/// renamed exactly once; after it runs, nothing matching `^__` remains for
/// the single-prefix rule to see.
pub fn rules_for<P: AsRef<Path>>(dir: P) -> Result<Vec<RenameRule>> {
    let dir = dir.as_ref();
    Ok(vec![
        RenameRule {
            directory: dir.to_path_buf(),
            pattern: Regex::new("^__").map_err(Error::RenamePattern)?,
            rename: restore_dotfile,
        },
        RenameRule {
            directory: dir.to_path_buf(),
            pattern: Regex::new("^_").map_err(Error::RenamePattern)?,
            rename: strip_underscore,
        },
    ])
}

/// The reference rules applied over a freshly materialized target: the
/// target root itself plus each of its first-level subdirectories, so an
/// obfuscated name one level down is restored as well.
pub fn default_rules<P: AsRef<Path>>(target_dir: P) -> Result<Vec<RenameRule>> {
    let target_dir = target_dir.as_ref();
    let mut rules = rules_for(target_dir)?;
    for entry in fs::read_dir(target_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            rules.extend(rules_for(entry.path())?);
        }
    }
    Ok(rules)
}

/// Applies every rule in order; each rule independently re-scans its
/// directory. Runs strictly after the full copy-render pass completes.
///
/// If a rule's destination name already exists the whole operation fails
/// with `Error::Rename` before touching the file, rather than silently
/// overwriting the existing one.
pub fn apply_renames(rules: &[RenameRule]) -> Result<()> {
    for rule in rules {
        for entry in fs::read_dir(&rule.directory)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !rule.pattern.is_match(name) {
                continue;
            }
            let new_name = (rule.rename)(name);
            let source = rule.directory.join(name);
            let target = rule.directory.join(&new_name);
            if target.exists() {
                return Err(Error::Rename {
                    from: source.display().to_string(),
                    to: target.display().to_string(),
                    reason: "destination already exists".to_string(),
                });
            }
            fs::rename(&source, &target).map_err(|e| Error::Rename {
                from: source.display().to_string(),
                to: target.display().to_string(),
                reason: e.to_string(),
            })?;
            debug!("renamed '{}' to '{}'", name, new_name);
        }
    }
    Ok(())
}
