//! Assertions over finished `workers-preview` runs.
//!
//! Failures print both streams, since wrangler diagnostics land on stderr
//! while the report goes to stdout.

use std::process::Output;

fn describe(output: &Output) -> String {
    format!(
        "exit: {:?}\n--- stdout ---\n{}--- stderr ---\n{}",
        output.status.code(),
        stdout(output),
        stderr(output)
    )
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn assert_success(output: &Output) {
    assert!(output.status.success(), "expected success\n{}", describe(output));
}

/// Non-zero exit: 1 for runtime errors, 2 for usage errors from clap.
pub fn assert_failure(output: &Output) {
    assert!(!output.status.success(), "expected failure\n{}", describe(output));
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    assert!(
        stdout(output).contains(expected),
        "stdout missing {expected:?}\n{}",
        describe(output)
    );
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    assert!(
        stderr(output).contains(expected),
        "stderr missing {expected:?}\n{}",
        describe(output)
    );
}
