use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tempfile::tempdir;

use barrelgen::config::settings::{AggregateOptions, Mode, Settings, DEFAULT_COMMENT};
use barrelgen::core::aggregator::aggregate_imports;

fn settings_for(root: &Path, output: &Path, library: &str) -> (Settings, AggregateOptions) {
    let opts = AggregateOptions {
        library: library.to_owned(),
    };
    let settings = Settings {
        input_dir: root.to_path_buf(),
        output_name: output.to_string_lossy().into_owned(),
        comment: DEFAULT_COMMENT.to_owned(),
        quiet: true,
        verbose: false,
        mode: Mode::Aggregate(opts.clone()),
    };
    (settings, opts)
}

fn body_of(index: &Path) -> String {
    let text = fs::read_to_string(index).unwrap();
    let (_, body) = text.split_once("\n\n").expect("header separator present");
    body.to_owned()
}

/// Parse `export { A, B } from 'path';` into its symbol set and path.
fn parse_export(line: &str) -> (BTreeSet<String>, String) {
    let inner = line
        .strip_prefix("export { ")
        .and_then(|rest| rest.strip_suffix("';"))
        .expect("well-formed export line");
    let (symbols, from) = inner.split_once(" } from '").expect("from clause");
    (
        symbols.split(", ").map(str::to_owned).collect(),
        from.to_owned(),
    )
}

#[test]
fn round_trip_rewrites_the_prefix_to_a_relative_path() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("app.ts"), "import { X, Y } from 'pkg/sub';\n").unwrap();

    let output = tmp.path().join("index.ts");
    let (settings, opts) = settings_for(&src, &output, "pkg");
    assert_eq!(aggregate_imports(&settings, &opts).unwrap(), 1);

    assert_eq!(body_of(&output), "export { X, Y } from './sub';\n");
}

#[test]
fn symbols_are_deduplicated_across_files_with_aliases_resolved() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("one.ts"), "import { A, B } from 'libx/foo';\n").unwrap();
    fs::write(
        src.join("two.ts"),
        "import { B as Bee, C } from 'libx/foo';\n",
    )
    .unwrap();

    let output = tmp.path().join("index.ts");
    let (settings, opts) = settings_for(&src, &output, "libx");
    aggregate_imports(&settings, &opts).unwrap();

    let body = body_of(&output);
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 1);

    let (symbols, from) = parse_export(lines[0]);
    let expected: BTreeSet<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    assert_eq!(symbols, expected);
    assert_eq!(from, "./foo");
}

#[test]
fn imports_outside_the_library_prefix_never_appear() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(
        src.join("app.ts"),
        "import { useState } from 'react';\nimport { A } from 'libx/foo';\n",
    )
    .unwrap();

    let output = tmp.path().join("index.ts");
    let (settings, opts) = settings_for(&src, &output, "libx");
    aggregate_imports(&settings, &opts).unwrap();

    assert_eq!(body_of(&output), "export { A } from './foo';\n");
}

#[test]
fn no_matching_imports_writes_no_file() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("app.ts"), "import { useState } from 'react';\n").unwrap();

    let output = tmp.path().join("index.ts");
    let (settings, opts) = settings_for(&src, &output, "libx");

    assert_eq!(aggregate_imports(&settings, &opts).unwrap(), 0);
    assert!(!output.exists());
}

#[test]
fn nested_directories_are_scanned() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir_all(src.join("deep").join("deeper")).unwrap();
    fs::write(
        src.join("deep").join("deeper").join("leaf.tsx"),
        "import { Leaf } from 'libx/leaf';\n",
    )
    .unwrap();

    let output = tmp.path().join("index.ts");
    let (settings, opts) = settings_for(&src, &output, "libx");
    aggregate_imports(&settings, &opts).unwrap();

    assert_eq!(body_of(&output), "export { Leaf } from './leaf';\n");
}

#[test]
fn non_source_files_are_ignored() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("notes.md"), "import { A } from 'libx/foo';\n").unwrap();

    let output = tmp.path().join("index.ts");
    let (settings, opts) = settings_for(&src, &output, "libx");

    assert_eq!(aggregate_imports(&settings, &opts).unwrap(), 0);
    assert!(!output.exists());
}

#[test]
fn existing_output_is_replaced() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("app.ts"), "import { A } from 'libx/foo';\n").unwrap();

    let output = tmp.path().join("index.ts");
    fs::write(&output, "// stale content\n").unwrap();

    let (settings, opts) = settings_for(&src, &output, "libx");
    assert_eq!(aggregate_imports(&settings, &opts).unwrap(), 1);
    assert_eq!(body_of(&output), "export { A } from './foo';\n");
}
