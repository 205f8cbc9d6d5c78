//! barrelgen - barrel index file generation for TypeScript source trees
//!
//! Scans a source tree and generates index files that re-export modules,
//! either by aggregating named imports from a target library across the whole
//! tree, or by emitting one re-export line per qualifying entry at each
//! directory level.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use crate::config::settings::{AggregateOptions, IncludeFilter, IndexOptions, Mode, Settings};
pub use crate::core::{aggregate_imports, generate_indexes, ImportAggregator, TreeEntry};
pub use crate::error::{BarrelError, Result, Severity};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
