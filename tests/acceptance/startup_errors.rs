use crate::support::sandbox::Sandbox;
use hamcrest2::assert_that;
use hamcrest2::prelude::*;

use cx_core::error::ExitCode;

#[test]
fn missing_runtime_fails_fast_with_executable_not_found() {
    let s = Sandbox::empty();

    let output = s.run::<_, &str>([]);

    assert_that!(
        output.status.code(),
        eq(Some(ExitCode::ExecutableNotFound as i32))
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not locate the bundled runtime"));
    assert!(output.stdout.is_empty());
}

#[test]
fn non_executable_runtime_exits_execution_failure() {
    let s = Sandbox::with_unusable_runtime();

    let output = s.run::<_, &str>([]);

    assert_that!(
        output.status.code(),
        eq(Some(ExitCode::ExecutionFailure as i32))
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not launch the bundled runtime"));
    assert!(output.stdout.is_empty());
}
