/// Controls whether a [`LineSink`](crate::LineSink) appends a trailing newline when writing lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered line.
    WithNewline,
    /// Emit the rendered line without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline when rendering a line.
    ///
    /// [`LineMode::WithNewline`] keeps each diagnostic on its own line.
    /// Exposing the behaviour as a method avoids requiring callers to
    /// pattern-match on the enum.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    /// Converts a boolean newline flag into a [`LineMode`].
    ///
    /// `true` maps to [`LineMode::WithNewline`] while `false` selects
    /// [`LineMode::WithoutNewline`], so call sites that already compute
    /// newline behaviour as a boolean can adopt the sink without branching
    /// on the enum variants themselves.
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}
