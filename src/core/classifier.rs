//! Per-directory export classification
//!
//! Decides which entries earn a re-export line in their directory's index
//! file, renders the lines from the configured template, and creates one
//! index file per directory that has anything to export.

use std::path::Path;

use crate::config::settings::{IncludeFilter, IndexOptions, Settings};
use crate::core::walker::{self, TreeEntry};
use crate::error::Result;
use crate::output::writer;
use crate::utils::template;

/// Generated index files are never re-exported, whatever the output name.
const RESERVED_INDEX_NAMES: [&str; 2] = ["index.ts", "index.js"];

/// Whether an entry qualifies for a re-export line.
///
/// An entry qualifies when it is not a reserved index file, is a file (or a
/// directory with directory inclusion enabled), passes the include pattern,
/// and does not match the exclude pattern. A bypassed pattern skips its check
/// entirely rather than matching everything.
pub fn should_export(entry: &TreeEntry, opts: &IndexOptions) -> bool {
    if RESERVED_INDEX_NAMES.contains(&entry.file_name.as_str()) {
        return false;
    }
    if entry.is_dir && !opts.export_directories {
        return false;
    }

    let path = entry.path.to_string_lossy();
    opts.include.matches(&path)
        && !opts
            .exclude
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&path))
}

/// Render the export line for a qualifying entry.
pub fn render_line(entry: &TreeEntry, line_template: &str) -> String {
    let dir = entry.dir.to_string_lossy();
    template::render(
        line_template,
        &[
            ("dir", dir.as_ref()),
            ("file", &entry.file_name),
            ("isDir", if entry.is_dir { "true" } else { "false" }),
            ("ext", &entry.ext),
            ("name", &entry.stem),
        ],
    )
}

/// Run the classifier pipeline over the configured input tree.
///
/// Every directory (the root included) gets one index write attempt, each
/// independently subject to the empty-body and overwrite rules. Returns the
/// number of index files actually written.
pub fn generate_indexes(settings: &Settings, opts: &IndexOptions) -> Result<usize> {
    generate_dir(&settings.input_dir, settings, opts)
}

fn generate_dir(dir: &Path, settings: &Settings, opts: &IndexOptions) -> Result<usize> {
    let mut body = String::new();
    let mut written = 0;

    for entry in walker::list_dir(dir)? {
        if should_export(&entry, opts) {
            body.push_str(&render_line(&entry, &opts.template));
        }
        if entry.is_dir {
            written += generate_dir(&entry.path, settings, opts)?;
        }
    }

    let target = dir.join(&settings.output_name);
    if writer::write_index(&target, &settings.comment, &body, opts.overwrite)? {
        written += 1;
    }

    Ok(written)
}

/// The built-in include rule used when no pattern is supplied: a recognized
/// source extension, excluding test files.
pub fn default_include(path: &str) -> bool {
    (path.ends_with(".ts") || path.ends_with(".tsx")) && !path.contains("test.ts")
}

impl IncludeFilter {
    /// Apply this filter to a full entry path.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            IncludeFilter::DefaultSources => default_include(path),
            IncludeFilter::Bypass => true,
            IncludeFilter::Pattern(pattern) => pattern.is_match(path),
        }
    }
}
