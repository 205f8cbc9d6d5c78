//! Core traversal, matching, and aggregation engine

pub mod aggregator;
pub mod classifier;
pub mod extractor;
pub mod walker;

pub use aggregator::{aggregate_imports, ImportAggregator};
pub use classifier::{generate_indexes, should_export};
pub use extractor::{extract_imports, ImportStatement};
pub use walker::{list_dir, walk, TreeEntry};
