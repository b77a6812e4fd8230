//! crates/logging/src/level.rs
//! Ordered log severities and their textual forms.

use std::fmt;
use std::str::FromStr;

/// Ordered severity of a log message.
///
/// The derived ordering drives filtering: a message is emitted only when its
/// level is at or above the service's configured threshold, so `Debug` is
/// the most permissive configuration and `Error` the most restrictive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// Diagnostic detail for development and troubleshooting.
    Debug,
    /// Routine operational messages.
    Info,
    /// Conditions worth attention that do not stop the process.
    Warning,
    /// Fatal conditions; logging at this level terminates the process.
    Error,
}

impl LogLevel {
    /// Returns the uppercase label used in configuration and rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LogLevel;
    ///
    /// assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
    /// assert_eq!(LogLevel::Error.as_str(), "ERROR");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Returns the bracketed prefix rendered ahead of the message body.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LogLevel;
    ///
    /// assert_eq!(LogLevel::Info.prefix(), "[INFO] ");
    /// ```
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG] ",
            Self::Info => "[INFO] ",
            Self::Warning => "[WARNING] ",
            Self::Error => "[ERROR] ",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level string matches none of the defined levels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized log level: {}", self.input)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Parses a level name case-insensitively.
    ///
    /// These are the strings accepted from `LOG_LEVEL` and from
    /// [`LoggingService::set_log_level`](crate::LoggingService::set_log_level).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("DEBUG") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("INFO") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("WARNING") {
            Ok(Self::Warning)
        } else if s.eq_ignore_ascii_case("ERROR") {
            Ok(Self::Error)
        } else {
            Err(ParseLevelError {
                input: s.to_owned(),
            })
        }
    }
}
