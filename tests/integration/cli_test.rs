use std::fs;
use std::path::PathBuf;
use std::process::Command;

use clap::Parser;
use tempfile::tempdir;

use barrelgen::cli::args::{Args, ModeCommand};

#[test]
fn index_subcommand_parses_all_flags() {
    let args = Args::parse_from([
        "barrelgen",
        "index",
        "--in",
        "./src",
        "--output",
        "exports.ts",
        "--template",
        "export * from './{{name}}';\\n",
        "--overwrite",
        "-d",
        "-r",
        "\\.tsx?$",
        "-s",
        "stories",
        "-c",
        "// custom",
        "--quiet",
    ]);

    assert!(args.quiet);
    assert!(!args.verbose);
    match args.command {
        ModeCommand::Index(index) => {
            assert_eq!(index.input, PathBuf::from("./src"));
            assert_eq!(index.output.as_deref(), Some("exports.ts"));
            assert!(index.overwrite);
            assert!(index.export_directories);
            assert_eq!(index.regexp.as_deref(), Some("\\.tsx?$"));
            assert_eq!(index.skip_regexp.as_deref(), Some("stories"));
            assert_eq!(index.comment.as_deref(), Some("// custom"));
        }
        ModeCommand::Aggregate(_) => panic!("expected index subcommand"),
    }
}

#[test]
fn aggregate_subcommand_parses_its_flags() {
    let args = Args::parse_from([
        "barrelgen",
        "aggregate",
        "-i",
        "./src",
        "-l",
        "@acme/ui",
        "--output",
        "src/ui/index.ts",
    ]);

    match args.command {
        ModeCommand::Aggregate(aggregate) => {
            assert_eq!(aggregate.input, PathBuf::from("./src"));
            assert_eq!(aggregate.library, "@acme/ui");
            assert_eq!(aggregate.output.as_deref(), Some("src/ui/index.ts"));
        }
        ModeCommand::Index(_) => panic!("expected aggregate subcommand"),
    }
}

#[test]
fn missing_required_arguments_fail_to_parse() {
    assert!(Args::try_parse_from(["barrelgen", "index"]).is_err());
    assert!(Args::try_parse_from(["barrelgen", "aggregate", "--in", "./src"]).is_err());
}

#[test]
fn binary_creates_index_files_and_exits_zero() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("alpha.ts"), "export const a = 1;").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_barrelgen"))
        .args(["index", "--in"])
        .arg(tmp.path())
        .arg("--quiet")
        .status()
        .expect("binary runs");

    assert!(status.success());
    assert!(tmp.path().join("index.ts").exists());
}

#[test]
fn binary_reports_a_missing_input_directory() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("absent");

    let output = Command::new(env!("CARGO_BIN_EXE_barrelgen"))
        .args(["index", "--in"])
        .arg(&missing)
        .output()
        .expect("binary runs");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid input directory"));
}
