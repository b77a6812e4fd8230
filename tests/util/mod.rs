//! Shared helpers for the svclog binary tests.
#![allow(dead_code)]

use std::process::{Command, Output};

/// Runs the svclog binary with the given arguments and a scrubbed
/// `LOG_LEVEL`, so the ambient environment cannot skew a test.
pub fn run_svclog(args: &[&str]) -> Output {
    svclog_command().args(args).output().expect("failed to run svclog")
}

/// Runs the svclog binary with `LOG_LEVEL` set to the given value.
pub fn run_svclog_with_level(level: &str, args: &[&str]) -> Output {
    svclog_command()
        .env("LOG_LEVEL", level)
        .args(args)
        .output()
        .expect("failed to run svclog")
}

fn svclog_command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_svclog"));
    command.env_remove("LOG_LEVEL");
    command
}

/// Returns the captured standard error as text.
pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Returns the captured standard output as text.
pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Asserts the process exited with the given status code.
pub fn assert_status(output: &Output, expected: i32) {
    let actual = output.status.code().unwrap_or(-1);
    assert_eq!(
        actual,
        expected,
        "unexpected exit status\nstdout: {}\nstderr: {}",
        stdout_text(output),
        stderr_text(output)
    );
}

/// Asserts a line is `<date> <time> <rest>` with the expected remainder.
pub fn assert_line(line: &str, expected_rest: &str) {
    assert!(
        line.len() > 20,
        "line too short for a timestamp prefix: {line:?}"
    );
    let stamp = &line[..19];
    for (index, ch) in stamp.char_indices() {
        match index {
            4 | 7 => assert_eq!(ch, '/', "bad date separator in {stamp:?}"),
            10 => assert_eq!(ch, ' ', "bad date/time separator in {stamp:?}"),
            13 | 16 => assert_eq!(ch, ':', "bad time separator in {stamp:?}"),
            _ => assert!(ch.is_ascii_digit(), "non-digit in timestamp {stamp:?}"),
        }
    }
    assert_eq!(&line[20..], expected_rest, "unexpected body in {line:?}");
}
