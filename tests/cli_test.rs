// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end runs of the command-line binary.

use local_properties::cli::USAGE;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_local-properties"))
        .args(args)
        .output()
        .expect("failed to run binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_single_k() {
    let output = run(&["12141218", "4"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(4,4) condition with (0, 1, 2, 3)\n");
}

#[test]
fn test_every_k_sequential() {
    let output = run(&["1212", "--sequential"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "(3,2) condition with (0, 2, 4)\n\
         (4,4) condition with (0, 1, 2, 3)\n\
         (5,6) condition with (0, 1, 2, 3, 4)\n"
    );
}

#[test]
fn test_zero_k_with_threads() {
    let output = run(&["123", "0", "-j", "2"]);
    assert_eq!(
        stdout(&output),
        "(3,3) condition with (0, 1, 2)\n(4,6) condition with (0, 1, 2, 3)\n"
    );
}

#[test]
fn test_no_valid_k_prints_nothing() {
    let output = run(&["1", "0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_invalid_input_prints_usage() {
    let cases: &[&[&str]] = &[
        &["1 2"],
        &["1,2", "3"],
        &["12141218", "10"],
        &["12141218", "2"],
        &["12141218", "-4"],
        &["12141218", "four"],
        &[],
    ];
    for args in cases {
        let output = run(args);
        assert!(output.status.success(), "{:?}", args);
        let text = stdout(&output);
        assert_eq!(text, USAGE, "{:?}", args);
        assert!(!text.contains("condition with"));
    }
}

#[test]
fn test_trailing_arguments_are_ignored() {
    let output = run(&["123", "3", "extra", "more"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(3,3) condition with (0, 1, 2)\n");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = run(&["12141218", "3", "-vv"]);
    assert_eq!(stdout(&output), "(3,3) condition with (0, 1, 2)\n");
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_piped_stderr_has_no_colour_codes() {
    let output = run(&["12141218", "2"]);
    assert_eq!(stdout(&output), USAGE);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("WARN"), "{}", stderr);
    assert!(!stderr.contains('\x1b'), "{:?}", stderr);
}
