//! Sequential depth-first directory traversal
//!
//! Entries are visited in filesystem listing order, one at a time, with no
//! concurrent traversal of sibling subtrees. Any listing or metadata failure
//! aborts the whole run. Symbolic links are classified by the target they
//! resolve to; cycles through symlinked directories are not detected, so a
//! self-referential link makes the walk recurse until the OS path limit.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BarrelError, Result};

/// One filesystem node observed during a walk.
///
/// Constructed per visit and handed to the caller's visitor; never persisted.
#[derive(Debug, Clone)]
pub struct TreeEntry {
    /// Full path of the entry
    pub path: PathBuf,
    /// Directory containing the entry
    pub dir: PathBuf,
    /// Entry name including any extension
    pub file_name: String,
    /// Extension with its leading dot, or an empty string
    pub ext: String,
    /// Entry name without the extension
    pub stem: String,
    /// Whether the entry resolves to a directory
    pub is_dir: bool,
}

impl TreeEntry {
    fn new(dir: &Path, path: PathBuf, is_dir: bool) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        TreeEntry {
            path,
            dir: dir.to_path_buf(),
            file_name,
            ext,
            stem,
            is_dir,
        }
    }
}

/// List one directory in filesystem order, classifying each entry.
///
/// Classification follows `fs::metadata`, so a symlink is reported as
/// whatever it points at. A broken link is a metadata failure and therefore
/// fatal.
pub fn list_dir(dir: &Path) -> Result<Vec<TreeEntry>> {
    let reader = fs::read_dir(dir).map_err(|e| BarrelError::read_dir(dir, e))?;
    let mut entries = Vec::new();

    for entry in reader {
        let entry = entry.map_err(|e| BarrelError::read_dir(dir, e))?;
        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|e| BarrelError::metadata(&path, e))?;
        entries.push(TreeEntry::new(dir, path, metadata.is_dir()));
    }

    Ok(entries)
}

/// Depth-first pre-order walk of `root`.
///
/// The visitor receives every entry before the walk descends into it. An
/// error from the visitor or from the filesystem stops the walk immediately.
pub fn walk<F>(root: &Path, visitor: &mut F) -> Result<()>
where
    F: FnMut(&TreeEntry) -> Result<()>,
{
    for entry in list_dir(root)? {
        visitor(&entry)?;
        if entry.is_dir {
            walk(&entry.path, visitor)?;
        }
    }
    Ok(())
}
