// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error handling policies for registries.

use crate::domain::ConfigError;
use std::fmt;

/// Exit status used when a registry with [`ErrorPolicy::ExitOnError`] fails.
pub const EXIT_STATUS: i32 = 2;

/// How a registry reacts when setting a value fails.
///
/// The policy is applied by [`Registry::set_from_text`](crate::service::Registry::set_from_text)
/// and therefore also by every load, which sets values one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return the error to the caller.
    #[default]
    ContinueOnError,
    /// Print the error to standard error and exit the process with status 2.
    ExitOnError,
    /// Panic with the error message.
    PanicOnError,
}

impl ErrorPolicy {
    /// Applies the policy to a failure raised by the registry named `registry`.
    ///
    /// Returns normally only for [`ErrorPolicy::ContinueOnError`].
    pub fn handle(self, registry: &str, error: &ConfigError) {
        match self {
            ErrorPolicy::ContinueOnError => {}
            ErrorPolicy::ExitOnError => {
                tracing::error!("Registry '{}' failed: {}", registry, error);
                eprintln!("{}: {}", registry, error);
                std::process::exit(EXIT_STATUS);
            }
            ErrorPolicy::PanicOnError => panic!("{}", error),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorPolicy::ContinueOnError => "continue",
            ErrorPolicy::ExitOnError => "exit",
            ErrorPolicy::PanicOnError => "panic",
        };
        f.write_str(name)
    }
}
