//! crates/logging/src/exit_code.rs
//! Process exit statuses used by the logging service.

use std::fmt;

/// Exit status the process terminates with.
///
/// The fatal logging path always terminates with [`ExitCode::Fatal`];
/// [`ExitCode::Ok`] exists for callers (such as the CLI driver) that reach a
/// normal end of execution.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion.
    Ok = 0,
    /// Fatal error; every error-level log call exits with this status.
    Fatal = 1,
}

impl ExitCode {
    /// Returns the numeric status handed to the operating system.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a short human-readable description of the status.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Fatal => "fatal error",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("Ok"),
            Self::Fatal => f.write_str("Fatal"),
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(match code {
            ExitCode::Ok => 0u8,
            ExitCode::Fatal => 1u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_match_the_contract() {
        assert_eq!(ExitCode::Ok.as_i32(), 0);
        assert_eq!(ExitCode::Fatal.as_i32(), 1);
    }

    #[test]
    fn descriptions_are_stable() {
        assert_eq!(ExitCode::Ok.description(), "success");
        assert_eq!(ExitCode::Fatal.description(), "fatal error");
    }

    #[test]
    fn display_names_the_variant() {
        assert_eq!(ExitCode::Fatal.to_string(), "Fatal");
    }

    #[test]
    fn conversion_to_i32_preserves_value() {
        assert_eq!(i32::from(ExitCode::Fatal), 1);
    }
}
