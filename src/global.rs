// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default registry.
//!
//! The free functions in this module declare settings on, and load files into,
//! a single [`Registry`] created on first use. It is named after the running
//! program and uses [`ErrorPolicy::ContinueOnError`].

use crate::domain::{ErrorPolicy, Handle, Result};
use crate::service::Registry;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use std::time::Duration;

static DEFAULT_REGISTRY: Lazy<Registry> =
    Lazy::new(|| Registry::new(program_name(), ErrorPolicy::ContinueOnError));

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Returns the process-wide default registry, creating it on first use.
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Declares a `bool` setting on the default registry.
pub fn declare_bool(name: &str, default: bool) -> Handle<bool> {
    default_registry().declare_bool(name, default)
}

/// Declares a platform-width signed integer setting on the default registry.
pub fn declare_int(name: &str, default: isize) -> Handle<isize> {
    default_registry().declare_int(name, default)
}

/// Declares an `i64` setting on the default registry.
pub fn declare_int64(name: &str, default: i64) -> Handle<i64> {
    default_registry().declare_int64(name, default)
}

/// Declares a platform-width unsigned integer setting on the default registry.
pub fn declare_uint(name: &str, default: usize) -> Handle<usize> {
    default_registry().declare_uint(name, default)
}

/// Declares a `u64` setting on the default registry.
pub fn declare_uint64(name: &str, default: u64) -> Handle<u64> {
    default_registry().declare_uint64(name, default)
}

/// Declares a string setting on the default registry.
pub fn declare_string(name: &str, default: impl Into<String>) -> Handle<String> {
    default_registry().declare_string(name, default)
}

/// Declares an `f64` setting on the default registry.
pub fn declare_float64(name: &str, default: f64) -> Handle<f64> {
    default_registry().declare_float64(name, default)
}

/// Declares a [`Duration`] setting on the default registry.
pub fn declare_duration(name: &str, default: Duration) -> Handle<Duration> {
    default_registry().declare_duration(name, default)
}

/// Loads a configuration file into the default registry.
///
/// This must be called after all settings have been declared but before their
/// handles are read by the program.
///
/// # Examples
///
/// ```rust,no_run
/// let country = tomlcfg::declare_string("country", "Unknown");
/// let enabled = tomlcfg::declare_bool("atlanta.enabled", false);
/// let population = tomlcfg::declare_int("atlanta.population", 0);
///
/// if let Err(err) = tomlcfg::parse("/path/to/myconfig.conf") {
///     panic!("{}", err);
/// }
/// println!("{} {} {}", country.get(), enabled.get(), population.get());
/// ```
pub fn parse(path: impl AsRef<Path>) -> Result<()> {
    default_registry().parse(path)
}
