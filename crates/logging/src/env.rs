//! crates/logging/src/env.rs
//! Environment lookup for the initial log level.

use std::env;

/// Name of the environment variable consulted when constructing a service
/// via [`LoggingService::from_env`](crate::LoggingService::from_env).
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Returns the raw `LOG_LEVEL` value when the variable is present.
///
/// Presence is what matters: an empty or garbage value still counts as
/// configuration input and flows through the level-setting fallback path.
/// An absent variable produces no configuration attempt at all.
pub(crate) fn log_level_var() -> Option<String> {
    env::var_os(LOG_LEVEL_ENV).map(|value| value.to_string_lossy().into_owned())
}
