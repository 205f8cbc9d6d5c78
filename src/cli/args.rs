//! Command-line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// barrelgen - generate barrel index files for TypeScript source trees
#[derive(Parser, Debug)]
#[command(name = "barrelgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate barrel index files for TypeScript source trees")]
#[command(after_help = "EXAMPLES:

Per-directory index files:
    # Create an index.ts in every directory under ./src
    barrelgen index --in ./src

    # Regenerate existing index files and include subdirectories
    barrelgen index --in ./src --overwrite -d -r ''

    # Skip generated and story files
    barrelgen index --in ./src -s '(generated|stories)'

Library import aggregation:
    # Collect everything imported from @acme/ui into one shim index
    barrelgen aggregate --in ./src --library @acme/ui --output src/ui/index.ts

    # Custom header comment (\\n expands to a newline)
    barrelgen aggregate --in ./src -l @acme/ui -c '// shim\\n// generated'
")]
pub struct Args {
    #[command(subcommand)]
    pub command: ModeCommand,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show the resolved settings at startup
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a configuration file (defaults to .barrelgen.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Pipeline subcommands
#[derive(Subcommand, Debug)]
pub enum ModeCommand {
    /// Create an index file in every directory with exportable entries
    Index(IndexArgs),
    /// Aggregate named imports from a library into a single index file
    Aggregate(AggregateArgs),
}

/// Arguments for the per-directory index pipeline
#[derive(clap::Args, Debug)]
pub struct IndexArgs {
    /// Input directory path
    #[arg(short = 'i', long = "in", value_name = "DIR")]
    pub input: PathBuf,

    /// Output filename (default: index.ts)
    #[arg(long, value_name = "FILENAME")]
    pub output: Option<String>,

    /// Template for each export line
    #[arg(long, value_name = "TEXT")]
    pub template: Option<String>,

    /// Overwrite existing index files
    #[arg(long)]
    pub overwrite: bool,

    /// Export directories in the index files
    #[arg(short = 'd', long)]
    pub export_directories: bool,

    /// Index entries whose path matches this pattern (empty disables the check)
    #[arg(short = 'r', long, value_name = "REGEXP")]
    pub regexp: Option<String>,

    /// Skip entries whose path matches this pattern
    #[arg(short = 's', long, value_name = "REGEXP")]
    pub skip_regexp: Option<String>,

    /// Comment placed at the top of each index file
    #[arg(short = 'c', long, value_name = "TEXT")]
    pub comment: Option<String>,
}

/// Arguments for the library import aggregation pipeline
#[derive(clap::Args, Debug)]
pub struct AggregateArgs {
    /// Input directory path
    #[arg(short = 'i', long = "in", value_name = "DIR")]
    pub input: PathBuf,

    /// Aggregate imports from this library
    #[arg(short = 'l', long, value_name = "PREFIX")]
    pub library: String,

    /// Output filename, relative to the working directory (default: index.ts)
    #[arg(long, value_name = "FILENAME")]
    pub output: Option<String>,

    /// Comment placed at the top of the index file
    #[arg(short = 'c', long, value_name = "TEXT")]
    pub comment: Option<String>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
