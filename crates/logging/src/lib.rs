#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` implements a process-wide leveled logging service: four ordered
//! severities (`DEBUG < INFO < WARNING < ERROR`), an initial level read from
//! the `LOG_LEVEL` environment variable, temporary output suppression
//! (mute/unmute), and a fatal error path that terminates the process with
//! exit status 1.
//!
//! # Design
//!
//! The service is an explicitly constructed [`LoggingService`] shared by
//! reference; there is no implicit module-level singleton. All output flows
//! through a swappable sink from the `logging-sink` crate: muting replaces
//! the active destination with a discard sink and remembers the previous
//! one, so process-global standard streams are never mutated. Every emitted
//! line carries a `YYYY/MM/DD HH:MM:SS` timestamp followed by a bracketed
//! level tag.
//!
//! # Invariants
//!
//! - The configured level is always one of the four defined levels;
//!   unrecognized configuration input falls back to `WARNING`.
//! - A previous destination is saved if and only if the service is muted.
//! - Every fatal call terminates the process with status 1, whether or not
//!   its message was written.
//!
//! # Errors
//!
//! The service surface is fire-and-forget: write failures on the underlying
//! destination are deliberately ignored. The only fallible parses,
//! [`LogLevel`] and [`ErrorTag`] from strings, return dedicated error types.
//!
//! # Examples
//!
//! ```
//! use logging::LoggingService;
//!
//! let service = LoggingService::with_writer(Vec::new());
//! service.set_log_level("debug");
//! service.debug("starting up");
//! service.info("ready");
//! ```

mod env;
mod error_tag;
mod exit_code;
mod guard;
mod level;
mod service;
mod timestamp;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use env::LOG_LEVEL_ENV;
pub use error_tag::{ErrorTag, UnknownErrorTag};
pub use exit_code::ExitCode;
pub use guard::MuteGuard;
pub use level::{LogLevel, ParseLevelError};
pub use service::LoggingService;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{ServiceLayer, init_tracing};
