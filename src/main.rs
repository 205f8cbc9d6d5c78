use std::process;

use ansi_term::Colour::Red;
use barrelgen::cli::{args::Args, commands};

fn main() {
    let args = Args::parse_args();
    process::exit(run(args));
}

/// Run the selected command, mapping errors to exit codes.
fn run(args: Args) -> i32 {
    match commands::run(args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{} {}", Red.paint("error:"), err);
            err.severity().exit_code()
        }
    }
}
