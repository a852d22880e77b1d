//! Configuration structures and loading utilities.
//!
//! Each concern gets its own config struct with defaults and an
//! environment-variable loader.

pub mod metrics;
pub mod rate_limit;
pub mod security;
pub mod token;

pub use metrics::*;
pub use rate_limit::*;
pub use security::*;
pub use token::*;

use std::env;
use std::str::FromStr;

/// Read a boolean flag from the environment, falling back to a default
pub(crate) fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(default)
}

/// Read a parseable value from the environment, falling back to a default
pub(crate) fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
