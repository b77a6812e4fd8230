//! crates/logging/src/service.rs
//! The logging service: filtering, rendering, mute/unmute, and the fatal path.

use std::io::Write;
use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};

use logging_sink::{LineSink, SinkWriter};

use crate::error_tag::ErrorTag;
use crate::exit_code::ExitCode;
use crate::guard::MuteGuard;
use crate::level::LogLevel;
use crate::{env, timestamp};

/// Line emitted when a level string fails to parse, through the
/// unconditional write path and without a level tag.
const ILLEGAL_LEVEL_WARNING: &str = "Illegal log level received, defaulting to WARNING";

/// Process-wide leveled logging service.
///
/// Construct one instance at process start and share it by reference (or
/// `Arc`) with every call site. The default configuration logs at
/// `WARNING` and above to the process standard error stream;
/// [`from_env`](Self::from_env) additionally applies the `LOG_LEVEL`
/// environment variable.
///
/// All state sits behind a single mutex, so concurrent configuration and
/// logging are safe. Write failures on the destination are deliberately
/// ignored; the surface is fire-and-forget.
///
/// # Examples
///
/// ```
/// use logging::LoggingService;
///
/// let service = LoggingService::with_writer(Vec::new());
/// service.set_log_level("info");
/// service.info("service started");
/// service.debug("not emitted at this level");
/// ```
pub struct LoggingService {
    state: Mutex<ServiceState>,
}

struct ServiceState {
    level: LogLevel,
    enabled: bool,
    sink: LineSink<SinkWriter>,
    /// Previous destination, present iff the service is muted.
    saved: Option<SinkWriter>,
}

impl LoggingService {
    /// Creates a service logging at `WARNING` and above to standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(SinkWriter::stderr())
    }

    /// Creates a service writing to the given destination.
    #[must_use]
    pub fn with_sink(writer: SinkWriter) -> Self {
        Self {
            state: Mutex::new(ServiceState {
                level: LogLevel::Warning,
                enabled: true,
                sink: LineSink::new(writer),
                saved: None,
            }),
        }
    }

    /// Creates a service writing to an arbitrary writer.
    ///
    /// Primarily useful for tests capturing emitted output.
    #[must_use]
    pub fn with_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_sink(SinkWriter::boxed(writer))
    }

    /// Creates a service and applies the `LOG_LEVEL` environment variable.
    ///
    /// An absent variable leaves the default `WARNING` level silently; a
    /// present but unrecognized value falls back to `WARNING` and emits the
    /// fallback warning line, exactly as [`set_log_level`](Self::set_log_level)
    /// does.
    #[must_use]
    pub fn from_env() -> Self {
        let service = Self::new();
        if let Some(value) = env::log_level_var() {
            service.set_log_level(&value);
        }
        service
    }

    /// Reconfigures the level from a string, case-insensitively.
    ///
    /// Never fails: an unrecognized value sets the level to `WARNING` and
    /// emits `"Illegal log level received, defaulting to WARNING"` through
    /// the unconditional write path, bypassing both the level filter and
    /// the enabled flag.
    pub fn set_log_level(&self, input: &str) {
        match input.parse::<LogLevel>() {
            Ok(level) => {
                self.lock().level = level;
            }
            Err(_) => {
                let mut state = self.lock();
                state.level = LogLevel::Warning;
                write_raw(&mut state, ILLEGAL_LEVEL_WARNING);
            }
        }
    }

    /// Returns the currently configured level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.lock().level
    }

    /// Reports whether the service is currently muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        !self.lock().enabled
    }

    /// Logs a message at `DEBUG`.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs a message at `INFO`.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a message at `WARNING`.
    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    /// Logs a fatal message and terminates the process with exit status 1.
    ///
    /// The message is written regardless of the mute flag; the level filter
    /// always admits `ERROR` since it is the maximum level. This call never
    /// returns.
    pub fn fatal(&self, message: &str) -> ! {
        self.fatal_tagged(message, ErrorTag::None)
    }

    /// Logs a tagged fatal message and terminates the process with exit
    /// status 1.
    ///
    /// Every recognized tag currently maps to a no-op code, so tagged and
    /// untagged fatals render identically. This call never returns.
    pub fn fatal_tagged(&self, message: &str, tag: ErrorTag) -> ! {
        self.write_error_line(message, tag);
        std::process::exit(ExitCode::Fatal.as_i32());
    }

    /// Terminates the process with exit status 1 without writing anything.
    ///
    /// This is the fatal path for messages whose tag string was not
    /// recognized: the write is skipped but the exit still happens.
    pub fn fatal_suppressed(&self) -> ! {
        std::process::exit(ExitCode::Fatal.as_i32());
    }

    /// Suppresses output until [`unmute`](Self::unmute) is called.
    ///
    /// A `"Mute logging"` debug line is emitted first, under the pre-mute
    /// configuration and subject to normal filtering. The active destination
    /// is then swapped for a discard sink and remembered for restoration.
    /// Muting an already muted service only re-emits nothing and keeps the
    /// originally saved destination.
    pub fn mute(&self) {
        self.debug("Mute logging");
        let mut state = self.lock();
        if state.saved.is_none() {
            let previous = mem::replace(state.sink.get_mut(), SinkWriter::discard());
            state.saved = Some(previous);
        }
        state.enabled = false;
    }

    /// Restores output after a [`mute`](Self::mute).
    ///
    /// The remembered destination is reinstated (the discard sink is
    /// dropped), logging is re-enabled, and a `"Unmute logging"` debug line
    /// is emitted under the restored configuration. Unmuting a service that
    /// is not muted only re-enables it.
    pub fn unmute(&self) {
        {
            let mut state = self.lock();
            if let Some(previous) = state.saved.take() {
                *state.sink.get_mut() = previous;
            }
            state.enabled = true;
        }
        self.debug("Unmute logging");
    }

    /// Mutes the service for the lifetime of the returned guard.
    ///
    /// Dropping the guard unmutes on every exit path, including panics.
    pub fn mute_guard(&self) -> MuteGuard<'_> {
        MuteGuard::new(self)
    }

    /// Writes an `[ERROR]`-tagged line unconditionally.
    ///
    /// Shared by the fatal entry points and the tracing bridge; the mute
    /// flag is not consulted (a muted service still targets the discard
    /// destination, so nothing becomes visible).
    pub(crate) fn write_error_line(&self, message: &str, _tag: ErrorTag) {
        let mut state = self.lock();
        let line = format!(
            "{} {}{}",
            timestamp::now(),
            LogLevel::Error.prefix(),
            message
        );
        let _ = state.sink.write_line(&line);
    }

    fn log(&self, level: LogLevel, message: &str) {
        let mut state = self.lock();
        if level < state.level || !state.enabled {
            return;
        }
        let line = format!("{} {}{}", timestamp::now(), level.prefix(), message);
        let _ = state.sink.write_line(&line);
    }

    fn lock(&self) -> MutexGuard<'_, ServiceState> {
        // A poisoned lock must not take the logger down with it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LoggingService {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes a timestamped line without a level tag, ignoring both the level
/// filter and the enabled flag.
fn write_raw(state: &mut ServiceState, text: &str) {
    let line = format!("{} {}", timestamp::now(), text);
    let _ = state.sink.write_line(&line);
}
