//! Index file writing
//!
//! Composes the header comment with a generated body and writes the result,
//! honoring the empty-body and overwrite rules shared by both pipelines.

use std::fs;
use std::path::Path;

use crate::error::{BarrelError, Result};

/// Write an index file at `path`, returning whether a file was written.
///
/// Skipped entirely when `body` is empty: no empty index files are ever
/// created. Skipped when the file already exists and `overwrite` is unset:
/// existing content is never silently clobbered. Otherwise the file becomes
/// the header comment, one blank line, then the body.
pub fn write_index(path: &Path, comment: &str, body: &str, overwrite: bool) -> Result<bool> {
    if body.is_empty() {
        return Ok(false);
    }
    if path.exists() && !overwrite {
        return Ok(false);
    }

    let text = format!("{comment}\n\n{body}");
    fs::write(path, text).map_err(|e| BarrelError::write_index(path, e))?;
    Ok(true)
}
