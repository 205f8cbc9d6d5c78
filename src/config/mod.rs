//! Configuration management
//!
//! Settings are assembled from two sources in priority order: an optional
//! TOML configuration file, then command-line arguments on top. The merged
//! overlay is validated once into an immutable `Settings`.

pub mod file;
pub mod settings;

pub use file::{FileConfig, DEFAULT_CONFIG_FILE};
pub use settings::{
    AggregateOptions, IncludeFilter, IndexOptions, Mode, ModeKind, PartialSettings, Settings,
};

use crate::cli::args::{Args, ModeCommand};
use crate::error::Result;

/// Resolve the final settings for a parsed command line.
pub fn load_config(args: &Args) -> Result<Settings> {
    let mut partial = PartialSettings::default();

    match &args.config {
        // An explicitly requested file must load.
        Some(path) => partial.merge_from(FileConfig::with_path(path).load()?),
        None => {
            let file = FileConfig::new();
            if file.is_available() {
                partial.merge_from(file.load()?);
            }
        }
    }

    let (cli_partial, kind) = partial_from_args(args);
    partial.merge_from(cli_partial);
    partial.build(kind)
}

/// Convert parsed arguments into a settings overlay.
///
/// Boolean flags only contribute when set, so a flag left at its default
/// never overrides a value from the configuration file.
fn partial_from_args(args: &Args) -> (PartialSettings, ModeKind) {
    let mut partial = PartialSettings {
        quiet: args.quiet.then_some(true),
        verbose: args.verbose.then_some(true),
        ..PartialSettings::default()
    };

    match &args.command {
        ModeCommand::Index(index) => {
            partial.input = Some(index.input.clone());
            partial.output = index.output.clone();
            partial.comment = index.comment.clone();
            partial.template = index.template.clone();
            partial.overwrite = index.overwrite.then_some(true);
            partial.export_directories = index.export_directories.then_some(true);
            partial.regexp = index.regexp.clone();
            partial.skip_regexp = index.skip_regexp.clone();
            (partial, ModeKind::Index)
        }
        ModeCommand::Aggregate(aggregate) => {
            partial.input = Some(aggregate.input.clone());
            partial.output = aggregate.output.clone();
            partial.comment = aggregate.comment.clone();
            partial.library = Some(aggregate.library.clone());
            (partial, ModeKind::Aggregate)
        }
    }
}
