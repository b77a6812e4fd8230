//! crates/logging-sink/src/sink.rs
//! Line-oriented sink wrapping an arbitrary writer.

use std::io::{self, Write};

use crate::line_mode::LineMode;

/// Streaming sink that writes fully rendered lines into a destination writer.
///
/// The sink owns the underlying writer together with a [`LineMode`] selecting
/// whether each line receives a trailing newline. All state lives on the
/// stack, making it inexpensive to move the sink when logging contexts
/// change, and [`get_mut`](Self::get_mut) exposes the writer so callers can
/// swap the destination in place.
///
/// # Examples
///
/// Collect rendered lines into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use logging_sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_line("first")?;
/// sink.write_line("second")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "first\nsecond\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct LineSink<W> {
    writer: W,
    line_mode: LineMode,
}

impl<W> LineSink<W> {
    /// Creates a sink that appends a newline after each rendered line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    ///
    /// The logging service relies on this to swap the destination value when
    /// muting and unmuting without reconstructing the sink.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for LineSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes a single rendered line to the underlying writer.
    ///
    /// The line is emitted as-is; when the sink's [`LineMode`] is
    /// [`LineMode::WithNewline`] a terminator follows.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        if self.line_mode.append_newline() {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::SinkWriter;
    use std::mem;

    #[test]
    fn sink_appends_newlines_by_default() {
        let mut sink = LineSink::new(Vec::new());
        sink.write_line("alpha").expect("write succeeds");
        sink.write_line("beta").expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("alpha"));
        assert_eq!(lines.next(), Some("beta"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn sink_without_newline_preserves_output() {
        let mut sink = LineSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.write_line("ready").expect("write succeeds");

        assert_eq!(sink.into_inner(), b"ready".to_vec());
    }

    #[test]
    fn set_line_mode_changes_subsequent_writes() {
        let mut sink = LineSink::new(Vec::new());
        sink.write_line("one").expect("write succeeds");
        sink.set_line_mode(LineMode::WithoutNewline);
        sink.write_line("two").expect("write succeeds");

        assert_eq!(sink.into_inner(), b"one\ntwo".to_vec());
    }

    #[test]
    fn get_mut_allows_swapping_the_destination() {
        let mut sink = LineSink::new(SinkWriter::boxed(Vec::new()));
        let previous = mem::replace(sink.get_mut(), SinkWriter::discard());
        assert!(!previous.is_discard());
        assert!(sink.get_ref().is_discard());

        sink.write_line("dropped").expect("write succeeds");

        *sink.get_mut() = previous;
        assert!(!sink.get_ref().is_discard());
    }

    #[test]
    fn default_sink_uses_default_writer() {
        let sink: LineSink<Vec<u8>> = LineSink::default();
        assert_eq!(sink.line_mode(), LineMode::WithNewline);
        assert!(sink.into_inner().is_empty());
    }
}
