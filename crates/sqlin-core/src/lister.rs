//! Directory listing
//!
//! Enumerates the direct entries of a directory (one level, no recursion)
//! and derives the base name of each one.

use crate::clause::{format_in_clause, ClauseOptions};
use crate::error::{Result, SqlinError};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Listing options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Keep regular files only; subdirectories and other entries are skipped
    #[serde(default)]
    pub files_only: bool,

    /// Order entries by file name instead of filesystem enumeration order
    #[serde(default)]
    pub sort: bool,
}

/// A directory rendered as an `IN` clause, with the names it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InClause {
    pub directory: PathBuf,
    pub names: Vec<String>,
    pub clause: String,
}

/// Strip the final extension from an entry name.
///
/// `x.y.sql` becomes `x.y`, names without a period are returned unchanged,
/// and a lone leading period (`.gitignore`) is not treated as an extension.
/// Only index 0 is exempt: `..foo` has its last period at index 1 and
/// becomes `.`.
pub fn base_name(entry: &str) -> &str {
    match entry.rfind('.') {
        Some(0) | None => entry,
        Some(idx) => &entry[..idx],
    }
}

/// List the base names of every direct entry in `directory`
pub fn list_entry_names(directory: &Path, options: &ListOptions) -> Result<Vec<String>> {
    let metadata = std::fs::metadata(directory).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SqlinError::DirectoryNotFound(directory.to_path_buf()),
        _ => SqlinError::io(directory, e),
    })?;
    if !metadata.is_dir() {
        return Err(SqlinError::NotADirectory(directory.to_path_buf()));
    }

    let mut walker = WalkDir::new(directory).min_depth(1).max_depth(1);
    if options.sort {
        walker = walker.sort_by_file_name();
    }

    let mut names = Vec::new();
    for entry in walker {
        let entry = entry?;
        if options.files_only && !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        names.push(base_name(&file_name).to_string());
    }

    tracing::debug!(
        directory = %directory.display(),
        entries = names.len(),
        "listed directory"
    );

    Ok(names)
}

/// Build the `IN` clause for `directory` using default options.
///
/// Every direct entry is included in enumeration order and names are not
/// escaped. An empty directory yields `IN ('')`.
pub fn build_in_clause(directory: &Path) -> Result<String> {
    build_in_clause_with(directory, &ListOptions::default(), &ClauseOptions::default())
}

/// Build the `IN` clause for `directory` with explicit options
pub fn build_in_clause_with(
    directory: &Path,
    list: &ListOptions,
    clause: &ClauseOptions,
) -> Result<String> {
    let names = list_entry_names(directory, list)?;
    Ok(format_in_clause(&names, clause))
}

/// Like [`build_in_clause_with`], but keeps the names alongside the clause
pub fn describe_directory(
    directory: &Path,
    list: &ListOptions,
    clause: &ClauseOptions,
) -> Result<InClause> {
    let names = list_entry_names(directory, list)?;
    let rendered = format_in_clause(&names, clause);

    Ok(InClause {
        directory: directory.to_path_buf(),
        names,
        clause: rendered,
    })
}
