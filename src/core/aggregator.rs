//! Library import aggregation
//!
//! Collects named imports across the whole tree, keyed by the module path as
//! written, then re-exports everything imported from a target library as one
//! export line per module path.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use crate::config::settings::{AggregateOptions, Settings};
use crate::core::{extractor, walker};
use crate::error::{BarrelError, Result};
use crate::output::writer;

/// Accumulator for imports seen during a walk.
///
/// Owned by the pipeline and threaded through the walker's visitor, so the
/// walk stays composable and testable in isolation. Keys keep the order in
/// which they were first seen; symbol lists keep duplicates until
/// [`finalize`](ImportAggregator::finalize) deduplicates them.
#[derive(Debug, Default)]
pub struct ImportAggregator {
    symbols: HashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl ImportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append symbols under a module-path key, creating the key on first use.
    pub fn record(&mut self, module_path: &str, symbols: Vec<String>) {
        match self.symbols.entry(module_path.to_owned()) {
            Entry::Occupied(mut slot) => slot.get_mut().extend(symbols),
            Entry::Vacant(slot) => {
                self.order.push(module_path.to_owned());
                slot.insert(symbols);
            }
        }
    }

    /// Render one export line per key matching `library_prefix`.
    ///
    /// The first occurrence of the prefix in the key is rewritten to `.`,
    /// symbols are deduplicated in first-occurrence order, and keys appear in
    /// first-seen order. Keys not starting with the prefix are dropped.
    ///
    /// A key exactly equal to the prefix rewrites to `.`, producing a
    /// self-referential export path. That matches the original tool and is
    /// deliberately left unchanged.
    pub fn finalize(&self, library_prefix: &str) -> String {
        let mut body = String::new();

        for key in &self.order {
            if !key.starts_with(library_prefix) {
                continue;
            }

            let from = key.replacen(library_prefix, ".", 1);
            let mut seen = HashSet::new();
            let names: Vec<&str> = self.symbols[key]
                .iter()
                .filter(|name| seen.insert(name.as_str()))
                .map(String::as_str)
                .collect();

            body.push_str(&format!(
                "export {{ {} }} from '{}';\n",
                names.join(", "),
                from
            ));
        }

        body
    }
}

/// Run the aggregator pipeline: walk the tree, collect imports from every
/// recognized source file, and write a single index file for the whole run.
///
/// The output path is taken relative to the current working directory, and an
/// existing file is always replaced. Returns the number of files written
/// (zero when no imports matched the library prefix).
pub fn aggregate_imports(settings: &Settings, opts: &AggregateOptions) -> Result<usize> {
    let mut aggregator = ImportAggregator::new();

    walker::walk(&settings.input_dir, &mut |entry| {
        if !entry.is_dir && extractor::is_source_extension(&entry.ext) {
            let source =
                fs::read_to_string(&entry.path).map_err(|e| BarrelError::read_file(&entry.path, e))?;
            for import in extractor::extract_imports(&source) {
                aggregator.record(&import.module_path, import.symbols);
            }
        }
        Ok(())
    })?;

    let body = aggregator.finalize(&opts.library);
    let target = PathBuf::from(&settings.output_name);
    let written = writer::write_index(&target, &settings.comment, &body, true)?;

    Ok(usize::from(written))
}
