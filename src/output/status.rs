//! Console status reporting
//!
//! Startup banner and completion summary, with quiet and verbose modes.
//! Results go to stdout; error reporting lives in `main`.

use ansi_term::Colour::{Cyan, Green};

use crate::config::settings::{Mode, Settings};

/// Status reporter for a single run
pub struct StatusReporter {
    quiet: bool,
    verbose: bool,
}

impl StatusReporter {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Print the startup banner and, in verbose mode, the resolved settings.
    pub fn start(&self, settings: &Settings) {
        if self.quiet {
            return;
        }

        println!("{} v{}", crate::NAME, crate::VERSION);
        let scan_path = Cyan.paint(settings.input_dir.display().to_string());
        match &settings.mode {
            Mode::Index(_) => println!("Creating index files in {scan_path}"),
            Mode::Aggregate(opts) => println!(
                "Aggregating imports from {} under {scan_path}",
                Cyan.paint(&opts.library)
            ),
        }

        if self.verbose {
            println!("Settings: {settings:#?}");
        }
    }

    /// Print the completion summary.
    pub fn finish(&self, written: usize) {
        if self.quiet {
            return;
        }

        let noun = if written == 1 { "file" } else { "files" };
        println!("{} {written} index {noun} written", Green.paint("Done."));
    }
}
