#![deny(unsafe_code)]

mod cli;

use std::{env, process::ExitCode};

fn main() -> ExitCode {
    cli::run_with(env::args_os().skip(1))
}
