//! crates/logging/src/error_tag.rs
//! Typed qualifier carried by fatal log calls.

use std::fmt;
use std::str::FromStr;

/// Qualifier attached to a fatal log call.
///
/// A single tag string, `SILENT`, is recognized and maps to a no-op
/// internal code: tagged fatals still render their message and still
/// terminate the process. Unrecognized tag strings are a parse failure;
/// callers route those to
/// [`LoggingService::fatal_suppressed`](crate::LoggingService::fatal_suppressed),
/// which skips the write but still exits.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorTag {
    /// No qualifier; the fatal message is rendered normally.
    #[default]
    None,
    /// The `SILENT` tag. Currently a no-op: the message is still rendered.
    Silent,
}

impl ErrorTag {
    /// Returns the canonical tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Silent => "SILENT",
        }
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag string matches no recognized error tag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownErrorTag {
    tag: String,
}

impl UnknownErrorTag {
    /// Returns the string that failed to parse.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for UnknownErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized error tag: {}", self.tag)
    }
}

impl std::error::Error for UnknownErrorTag {}

impl FromStr for ErrorTag {
    type Err = UnknownErrorTag;

    /// Parses a tag string.
    ///
    /// Matching is case-sensitive: only the exact string `SILENT` is
    /// recognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SILENT" => Ok(Self::Silent),
            _ => Err(UnknownErrorTag { tag: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_parses_exactly() {
        assert_eq!("SILENT".parse::<ErrorTag>().unwrap(), ErrorTag::Silent);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("silent".parse::<ErrorTag>().is_err());
        assert!("Silent".parse::<ErrorTag>().is_err());
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let err = "LOUD".parse::<ErrorTag>().unwrap_err();
        assert_eq!(err.tag(), "LOUD");
        assert_eq!(err.to_string(), "unrecognized error tag: LOUD");
    }

    #[test]
    fn none_is_the_default_tag() {
        assert_eq!(ErrorTag::default(), ErrorTag::None);
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(ErrorTag::None.to_string(), "NONE");
        assert_eq!(ErrorTag::Silent.to_string(), "SILENT");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_preserves_tag() {
        let json = serde_json::to_string(&ErrorTag::Silent).unwrap();
        let decoded: ErrorTag = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, ErrorTag::Silent);
    }
}
