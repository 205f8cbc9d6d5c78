//! Indexing settings and validation
//!
//! `Settings` is the validated options struct handed to the core; it is
//! immutable for the duration of one run. `PartialSettings` is the overlay
//! type every configuration source produces, merged in priority order before
//! the final build.

use std::path::PathBuf;

use regex::Regex;
use serde::Deserialize;

use crate::error::{BarrelError, Result};

/// Default output filename
pub const DEFAULT_OUTPUT: &str = "index.ts";

/// Default header comment, two lines
pub const DEFAULT_COMMENT: &str = "// Auto generated index file.\n//  do not edit by hand.";

/// Default export-line template
pub const DEFAULT_TEMPLATE: &str = "export * from './{{name}}';\n";

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root directory to scan
    pub input_dir: PathBuf,
    /// Name of the generated index file
    pub output_name: String,
    /// Header comment, escaped newlines already expanded
    pub comment: String,
    /// Suppress non-essential output
    pub quiet: bool,
    /// Dump resolved settings at startup
    pub verbose: bool,
    /// Pipeline selection with its mode-specific options
    pub mode: Mode,
}

/// Which pipeline to run
#[derive(Debug, Clone)]
pub enum Mode {
    /// Per-directory index generation
    Index(IndexOptions),
    /// Whole-tree library import aggregation
    Aggregate(AggregateOptions),
}

/// Options for the per-directory classifier pipeline
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Export-line template, escaped newlines already expanded
    pub template: String,
    /// Replace existing index files
    pub overwrite: bool,
    /// Emit export lines for subdirectories too
    pub export_directories: bool,
    /// Include pattern applied to full entry paths
    pub include: IncludeFilter,
    /// Exclude pattern applied to full entry paths, `None` bypasses the check
    pub exclude: Option<Regex>,
}

/// Options for the import aggregator pipeline
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Library prefix whose imports are collected
    pub library: String,
}

/// Include-pattern state for the classifier.
///
/// An absent pattern means the built-in source-file rule; an explicitly empty
/// pattern bypasses the check entirely. The two are not the same thing.
#[derive(Debug, Clone)]
pub enum IncludeFilter {
    /// Built-in rule: recognized source extensions, excluding test files
    DefaultSources,
    /// Check disabled by an explicitly empty pattern
    Bypass,
    /// User-supplied pattern
    Pattern(Regex),
}

/// Which subcommand the settings are being built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Index,
    Aggregate,
}

/// Unresolved settings overlay produced by each configuration source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialSettings {
    pub input: Option<PathBuf>,
    pub output: Option<String>,
    pub comment: Option<String>,
    pub template: Option<String>,
    pub overwrite: Option<bool>,
    pub export_directories: Option<bool>,
    pub regexp: Option<String>,
    pub skip_regexp: Option<String>,
    pub library: Option<String>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Merge another overlay into this one; fields from `other` win.
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.input.is_some() {
            self.input = other.input;
        }
        if other.output.is_some() {
            self.output = other.output;
        }
        if other.comment.is_some() {
            self.comment = other.comment;
        }
        if other.template.is_some() {
            self.template = other.template;
        }
        if other.overwrite.is_some() {
            self.overwrite = other.overwrite;
        }
        if other.export_directories.is_some() {
            self.export_directories = other.export_directories;
        }
        if other.regexp.is_some() {
            self.regexp = other.regexp;
        }
        if other.skip_regexp.is_some() {
            self.skip_regexp = other.skip_regexp;
        }
        if other.library.is_some() {
            self.library = other.library;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Build and validate the final settings for the selected mode.
    ///
    /// Defaults are applied here, escaped `\n` sequences in the comment and
    /// template are expanded, and user patterns are compiled once so the
    /// traversal never re-compiles them.
    pub fn build(self, kind: ModeKind) -> Result<Settings> {
        let input_dir = self
            .input
            .ok_or_else(|| BarrelError::config("missing mandatory argument --in"))?;
        if !input_dir.is_dir() {
            return Err(BarrelError::invalid_path(input_dir));
        }

        let output_name = self.output.unwrap_or_else(|| DEFAULT_OUTPUT.to_owned());
        if output_name.is_empty() {
            return Err(BarrelError::config("output filename must not be empty"));
        }

        let comment = expand_newlines(&self.comment.unwrap_or_else(|| DEFAULT_COMMENT.to_owned()));

        let mode = match kind {
            ModeKind::Index => Mode::Index(IndexOptions {
                template: expand_newlines(
                    &self.template.unwrap_or_else(|| DEFAULT_TEMPLATE.to_owned()),
                ),
                overwrite: self.overwrite.unwrap_or(false),
                export_directories: self.export_directories.unwrap_or(false),
                include: build_include(self.regexp)?,
                exclude: build_exclude(self.skip_regexp)?,
            }),
            ModeKind::Aggregate => Mode::Aggregate(AggregateOptions {
                library: self
                    .library
                    .ok_or_else(|| BarrelError::config("missing mandatory argument --library"))?,
            }),
        };

        Ok(Settings {
            input_dir,
            output_name,
            comment,
            quiet: self.quiet.unwrap_or(false),
            verbose: self.verbose.unwrap_or(false),
            mode,
        })
    }
}

/// Expand escaped `\n` sequences from the command line into real newlines.
fn expand_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn build_include(pattern: Option<String>) -> Result<IncludeFilter> {
    match pattern {
        None => Ok(IncludeFilter::DefaultSources),
        Some(p) if p.is_empty() => Ok(IncludeFilter::Bypass),
        Some(p) => Regex::new(&p)
            .map(IncludeFilter::Pattern)
            .map_err(|e| BarrelError::pattern(p, e)),
    }
}

fn build_exclude(pattern: Option<String>) -> Result<Option<Regex>> {
    match pattern {
        None => Ok(None),
        Some(p) if p.is_empty() => Ok(None),
        Some(p) => Regex::new(&p)
            .map(Some)
            .map_err(|e| BarrelError::pattern(p, e)),
    }
}
