//! src/bin/cli.rs
//! Command-line driver for the logging service.
//!
//! # Overview
//!
//! `svclog` emits one log line through a freshly constructed
//! [`LoggingService`] and exits. The service reads `LOG_LEVEL` from the
//! environment; `--level` overrides it for this invocation. The `error`
//! command terminates the process with exit status 1 after writing (or,
//! for an unrecognized `--tag`, without writing).
//!
//! # Usage
//!
//! ```text
//! svclog [--level LEVEL] [--mute] [--unmute] <debug|info|warning|error> [--tag TAG] [MESSAGE...]
//! ```

use std::ffi::OsString;
use std::process::ExitCode as ProcessExitCode;

use logging::{ErrorTag, ExitCode, LoggingService};

const USAGE: &str = "\
usage: svclog [--level LEVEL] [--mute] [--unmute] <COMMAND> [--tag TAG] [MESSAGE...]

commands:
  debug      log MESSAGE at DEBUG
  info       log MESSAGE at INFO
  warning    log MESSAGE at WARNING
  error      log MESSAGE at ERROR and exit with status 1

options:
  --level LEVEL   set the level threshold (DEBUG, INFO, WARNING, ERROR);
                  unrecognized values fall back to WARNING with a warning line
  --mute          mute the service before logging
  --unmute        unmute the service before logging
  --tag TAG       error tag (error command only); SILENT still writes,
                  any other tag suppresses the write but keeps the exit
  --help          print this message and exit
";

/// A parsed invocation, ready to run against a service.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    level: Option<String>,
    mute: bool,
    unmute: bool,
    command: Command,
    tag: Option<String>,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Debug,
    Info,
    Warning,
    Error,
}

/// What `parse` decided to do with the argument list.
#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Invocation),
    Help,
}

/// Why an argument list was rejected.
#[derive(Debug, PartialEq, Eq)]
enum UsageError {
    MissingCommand,
    MissingValue(&'static str),
    UnknownFlag(String),
    UnknownCommand(String),
    TagWithoutError,
    NotUtf8,
}

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCommand => write!(f, "missing command"),
            Self::MissingValue(flag) => write!(f, "{flag} requires a value"),
            Self::UnknownFlag(flag) => write!(f, "unknown option: {flag}"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            Self::TagWithoutError => write!(f, "--tag is only valid with the error command"),
            Self::NotUtf8 => write!(f, "arguments must be valid UTF-8"),
        }
    }
}

/// Parses and executes an argument list, returning the process exit code.
///
/// Usage errors print the usage text to standard error and exit with
/// status 1, matching the service's own fatal status.
pub fn run_with<I>(args: I) -> ProcessExitCode
where
    I: IntoIterator<Item = OsString>,
{
    match parse(args) {
        Ok(Parsed::Help) => {
            print!("{USAGE}");
            ProcessExitCode::from(ExitCode::Ok)
        }
        Ok(Parsed::Run(invocation)) => execute(&invocation),
        Err(error) => {
            eprintln!("svclog: {error}");
            eprint!("{USAGE}");
            ProcessExitCode::from(ExitCode::Fatal)
        }
    }
}

fn parse<I>(args: I) -> Result<Parsed, UsageError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut level = None;
    let mut mute = false;
    let mut unmute = false;
    let mut tag = None;
    let mut command = None;
    let mut words: Vec<String> = Vec::new();

    while let Some(arg) = args.next() {
        let arg = arg.into_string().map_err(|_| UsageError::NotUtf8)?;
        if command.is_none() || arg.starts_with("--") {
            match arg.as_str() {
                "--help" => return Ok(Parsed::Help),
                "--level" => {
                    let value = args.next().ok_or(UsageError::MissingValue("--level"))?;
                    level = Some(value.into_string().map_err(|_| UsageError::NotUtf8)?);
                }
                "--mute" => mute = true,
                "--unmute" => unmute = true,
                "--tag" => {
                    let value = args.next().ok_or(UsageError::MissingValue("--tag"))?;
                    tag = Some(value.into_string().map_err(|_| UsageError::NotUtf8)?);
                }
                flag if flag.starts_with("--") => {
                    return Err(UsageError::UnknownFlag(flag.to_owned()));
                }
                "debug" => command = Some(Command::Debug),
                "info" => command = Some(Command::Info),
                "warning" => command = Some(Command::Warning),
                "error" => command = Some(Command::Error),
                other => return Err(UsageError::UnknownCommand(other.to_owned())),
            }
        } else {
            words.push(arg);
        }
    }

    let command = command.ok_or(UsageError::MissingCommand)?;
    if tag.is_some() && command != Command::Error {
        return Err(UsageError::TagWithoutError);
    }

    Ok(Parsed::Run(Invocation {
        level,
        mute,
        unmute,
        command,
        tag,
        message: words.join(" "),
    }))
}

fn execute(invocation: &Invocation) -> ProcessExitCode {
    let service = LoggingService::from_env();
    if let Some(level) = &invocation.level {
        service.set_log_level(level);
    }
    if invocation.mute {
        service.mute();
    }
    if invocation.unmute {
        service.unmute();
    }

    match invocation.command {
        Command::Debug => service.debug(&invocation.message),
        Command::Info => service.info(&invocation.message),
        Command::Warning => service.warning(&invocation.message),
        Command::Error => match &invocation.tag {
            None => service.fatal(&invocation.message),
            Some(tag) => match tag.parse::<ErrorTag>() {
                Ok(tag) => service.fatal_tagged(&invocation.message, tag),
                Err(_) => service.fatal_suppressed(),
            },
        },
    }

    ProcessExitCode::from(ExitCode::Ok)
}
