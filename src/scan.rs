//! Source directory scanning and paired-header lookup.
//!
//! Paths are kept relative to the project root, exactly as configured, so
//! they match what the analyzer prints. The analyzer is run with the
//! project root as its working directory.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::CheckerConfig;
use crate::error::{IwyuError, Result};

/// A translation unit found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name, e.g. `device.cpp`.
    pub name: String,
    /// Path handed to the analyzer, e.g. `./src/device.cpp`.
    pub path: PathBuf,
    /// Path as the analyzer reports it, e.g. `src/device.cpp`.
    pub display: String,
}

impl SourceFile {
    /// Build a source file entry from the configured source directory.
    pub fn new(source_dir: &Path, name: &str) -> Self {
        let path = source_dir.join(name);
        let display = display_path(&path);
        Self {
            name: name.to_string(),
            path,
            display,
        }
    }
}

/// Render a path the way the analyzer prints it: without a leading `./`.
pub fn display_path(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// List the translation units in the source directory.
///
/// Only immediate entries are considered; subdirectories are not searched.
/// Symbolic links to files count as files. Results are sorted by file name.
pub fn scan_sources(root: &Path, config: &CheckerConfig) -> Result<Vec<SourceFile>> {
    let dir = root.join(&config.source_dir);
    tracing::debug!("Scanning {} for sources", dir.display());

    let entries = fs::read_dir(&dir).map_err(|source| IwyuError::DirectoryUnreadable {
        path: dir.clone(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !target_metadata(&entry).is_some_and(|meta| meta.is_file()) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let matches = Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| config.is_source_extension(e));
        if matches {
            names.push(name);
        }
    }

    names.sort();
    Ok(names
        .iter()
        .map(|name| SourceFile::new(&config.source_dir, name))
        .collect())
}

/// Find the header whose stem matches the source file's stem.
///
/// The include directory is walked recursively; files in a directory are
/// checked before its subdirectories, both in sorted order. Returns the
/// header's display path, or `None` if there is no such header (including
/// when the include directory does not exist).
pub fn find_paired_header(
    root: &Path,
    config: &CheckerConfig,
    source_name: &str,
) -> Result<Option<String>> {
    let Some(stem) = Path::new(source_name).file_stem() else {
        return Ok(None);
    };

    let base = root.join(&config.include_dir);
    if !base.is_dir() {
        tracing::debug!("Include directory {} not found", base.display());
        return Ok(None);
    }

    let mut visited = HashSet::new();
    let found = walk_for_stem(&base, Path::new(""), stem, config, &mut visited)?;
    Ok(found.map(|rel| display_path(&config.include_dir.join(rel))))
}

/// Metadata of what `entry` points at, following symbolic links.
///
/// `None` for dangling links and entries that vanish mid-scan.
fn target_metadata(entry: &fs::DirEntry) -> Option<fs::Metadata> {
    match fs::metadata(entry.path()) {
        Ok(meta) => Some(meta),
        Err(e) => {
            tracing::debug!("Skipping {}: {}", entry.path().display(), e);
            None
        }
    }
}

fn walk_for_stem(
    base: &Path,
    rel: &Path,
    stem: &std::ffi::OsStr,
    config: &CheckerConfig,
    visited: &mut HashSet<PathBuf>,
) -> Result<Option<PathBuf>> {
    let dir = base.join(rel);

    // Linked directories can lead back to an ancestor.
    let canonical = fs::canonicalize(&dir).unwrap_or_else(|_| dir.clone());
    if !visited.insert(canonical) {
        tracing::debug!("Already searched {}", dir.display());
        return Ok(None);
    }

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            tracing::warn!("Skipping unreadable directory {}: {}", dir.display(), e);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in entries {
        let entry = entry?;
        let Some(meta) = target_metadata(&entry) else {
            continue;
        };
        if meta.is_dir() {
            subdirs.push(entry.file_name());
        } else if meta.is_file() {
            files.push(entry.file_name());
        }
    }
    files.sort();
    subdirs.sort();

    for file in files {
        let candidate = Path::new(&file);
        let is_header = candidate
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| config.is_header_extension(e));
        if is_header && candidate.file_stem() == Some(stem) {
            return Ok(Some(rel.join(file)));
        }
    }

    for sub in subdirs {
        if let Some(found) = walk_for_stem(base, &rel.join(sub), stem, config, visited)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}
