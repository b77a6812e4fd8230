//! crates/logging-sink/src/writer.rs
//! Concrete destinations for rendered log lines.

use std::fmt;
use std::io::{self, Write};

/// Destination a [`LineSink`](crate::LineSink) writes into.
///
/// The logging service swaps destinations at runtime when muting and
/// unmuting, so the writer is an owned enum value rather than a generic
/// parameter. [`SinkWriter::Boxed`] accepts any `Write + Send` implementor,
/// which is how tests capture emitted output.
pub enum SinkWriter {
    /// Process standard error, the default log destination.
    Stderr(io::Stderr),
    /// Process standard output.
    Stdout(io::Stdout),
    /// Swallows every write; installed while logging is muted.
    Discard,
    /// Caller-supplied destination.
    Boxed(Box<dyn Write + Send>),
}

impl SinkWriter {
    /// Creates a writer targeting the process standard error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self::Stderr(io::stderr())
    }

    /// Creates a writer targeting the process standard output stream.
    #[must_use]
    pub fn stdout() -> Self {
        Self::Stdout(io::stdout())
    }

    /// Creates a writer that discards everything written to it.
    #[must_use]
    pub const fn discard() -> Self {
        Self::Discard
    }

    /// Wraps an arbitrary writer as a sink destination.
    #[must_use]
    pub fn boxed<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::Boxed(Box::new(writer))
    }

    /// Reports whether writes to this destination are being discarded.
    #[must_use]
    pub const fn is_discard(&self) -> bool {
        matches!(self, Self::Discard)
    }
}

impl Default for SinkWriter {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stderr(writer) => writer.write(buf),
            Self::Stdout(writer) => writer.write(buf),
            Self::Discard => Ok(buf.len()),
            Self::Boxed(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stderr(writer) => writer.flush(),
            Self::Stdout(writer) => writer.flush(),
            Self::Discard => Ok(()),
            Self::Boxed(writer) => writer.flush(),
        }
    }
}

impl fmt::Debug for SinkWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr(_) => f.write_str("SinkWriter::Stderr"),
            Self::Stdout(_) => f.write_str("SinkWriter::Stdout"),
            Self::Discard => f.write_str("SinkWriter::Discard"),
            Self::Boxed(_) => f.write_str("SinkWriter::Boxed(..)"),
        }
    }
}
