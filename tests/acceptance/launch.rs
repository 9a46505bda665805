use std::fs;

use crate::support::sandbox::{reported_args, reported_value, Sandbox};
use hamcrest2::assert_that;
use hamcrest2::prelude::*;

use cx_core::run::FIXED_PREFIX;

#[test]
fn no_arguments_yield_exactly_the_fixed_prefix() {
    let s = Sandbox::new();

    let output = s.run::<_, &str>([]);

    assert_that!(output.status.code(), eq(Some(0)));
    assert_eq!(reported_args(&output), FIXED_PREFIX.to_vec());
}

#[test]
fn user_arguments_are_forwarded_in_order_after_the_prefix() {
    let s = Sandbox::new();

    let output = s.run(["deploy", "--verbose", "two words", "-x"]);

    let mut expected: Vec<String> = FIXED_PREFIX.iter().map(|arg| arg.to_string()).collect();
    expected.extend(
        ["deploy", "--verbose", "two words", "-x"]
            .iter()
            .map(|arg| arg.to_string()),
    );
    assert_eq!(reported_args(&output), expected);
}

#[test]
fn caller_directory_is_recorded_in_the_environment() {
    let s = Sandbox::new();

    let first = tempfile::tempdir().expect("could not create working directory");
    let second = tempfile::tempdir().expect("could not create working directory");

    let mut from_first = s.launcher();
    from_first.current_dir(first.path());
    let first_output = from_first.output().expect("could not run the launcher");

    let mut from_second = s.launcher();
    from_second.current_dir(second.path());
    let second_output = from_second.output().expect("could not run the launcher");

    // current_dir reports fully resolved paths, so compare against the
    // canonicalized sandbox directories
    let first_expected = fs::canonicalize(first.path()).unwrap();
    let second_expected = fs::canonicalize(second.path()).unwrap();

    let first_reported = reported_value(&first_output, "cwd-var").unwrap();
    let second_reported = reported_value(&second_output, "cwd-var").unwrap();

    assert_eq!(first_reported, first_expected.display().to_string());
    assert_eq!(second_reported, second_expected.display().to_string());
    assert_ne!(first_reported, second_reported);
}

#[test]
fn child_runs_from_the_install_root() {
    let s = Sandbox::new();

    let output = s.run::<_, &str>([]);

    let expected = fs::canonicalize(s.install_dir()).unwrap();
    assert_that!(
        reported_value(&output, "run-dir"),
        eq(Some(expected.display().to_string()))
    );
}

#[test]
fn runtime_output_is_passed_through_unmodified() {
    let s = Sandbox::new();

    let output = s.run::<_, &str>([]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("runtime stdout marker"));
    assert!(stderr.contains("runtime stderr marker"));
}

#[test]
fn successful_runtime_exit_is_mirrored() {
    let s = Sandbox::new();

    let mut command = s.launcher();
    command.env("FAKE_RUNTIME_EXIT", "0");
    let output = command.output().expect("could not run the launcher");

    assert_that!(output.status.code(), eq(Some(0)));
}

#[test]
fn failing_runtime_exit_is_mirrored() {
    let s = Sandbox::new();

    let mut command = s.launcher();
    command.env("FAKE_RUNTIME_EXIT", "7");
    let output = command.output().expect("could not run the launcher");

    assert_that!(output.status.code(), eq(Some(7)));
}

#[test]
fn arbitrary_runtime_exit_codes_are_mirrored() {
    let s = Sandbox::new();

    let mut command = s.launcher();
    command.env("FAKE_RUNTIME_EXIT", "23");
    let output = command.output().expect("could not run the launcher");

    assert_that!(output.status.code(), eq(Some(23)));
}

#[test]
fn signal_killed_runtime_exits_one() {
    // A runtime killed by a signal has no exit code to mirror
    let s = Sandbox::with_runtime("#!/bin/sh\nkill -9 $$\n");

    let output = s.run::<_, &str>([]);

    assert_that!(output.status.code(), eq(Some(1)));
}
