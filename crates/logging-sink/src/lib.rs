#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the writer-facing primitives the logging service
//! renders into. The service formats each diagnostic as a complete line and
//! hands it to a [`LineSink`], which owns the destination writer together
//! with a [`LineMode`] controlling newline termination.
//!
//! # Design
//!
//! Destinations are represented by [`SinkWriter`], a closed enum over the
//! process standard streams, a discard sink, and an arbitrary boxed writer.
//! Keeping the destination an owned value rather than a type parameter is
//! what allows the logging service to swap destinations at runtime: muting
//! replaces the active writer with [`SinkWriter::Discard`] and unmuting puts
//! the previous writer back.
//!
//! # Invariants
//!
//! - A sink never buffers: every [`LineSink::write_line`] call reaches the
//!   underlying writer before returning.
//! - [`LineMode::WithNewline`] is the default; log output is line oriented
//!   unless a caller opts out.
//! - [`SinkWriter::Discard`] accepts and swallows writes infallibly.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer. The discard destination never fails.

mod line_mode;
mod sink;
mod writer;

pub use line_mode::LineMode;
pub use sink::LineSink;
pub use writer::SinkWriter;
