//! Command execution

use crate::cli::args::Args;
use crate::config::{self, Mode};
use crate::core::{aggregator, classifier};
use crate::error::Result;
use crate::output::StatusReporter;

/// Resolve settings, run the selected pipeline, and report status.
pub fn run(args: Args) -> Result<()> {
    let settings = config::load_config(&args)?;
    let reporter = StatusReporter::new(settings.quiet, settings.verbose);
    reporter.start(&settings);

    let written = match &settings.mode {
        Mode::Index(opts) => classifier::generate_indexes(&settings, opts)?,
        Mode::Aggregate(opts) => aggregator::aggregate_imports(&settings, opts)?,
    };

    reporter.finish(written);
    Ok(())
}
