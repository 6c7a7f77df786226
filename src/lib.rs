// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration settings loaded from TOML files.
//!
//! Programs declare their settings up front, each with a name and a default,
//! and then load a configuration file once to overwrite the defaults with the
//! values the file supplies. The file's sections map onto dotted setting
//! names, so given
//!
//! ```toml
//! country = "USA"
//!
//! [atlanta]
//! enabled = true
//! population = 432427
//! temperature = 99.6
//! ```
//!
//! the settings are `country`, `atlanta.enabled`, `atlanta.population` and
//! `atlanta.temperature`.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `ConfigTree`, settings, errors)
//! - **Ports**: Trait definitions for document parsers (`ConfigParser`)
//! - **Adapters**: TOML and YAML parsers, file access
//! - **Service**: The `Registry` that owns settings and loads documents into them
//!
//! # Behavior
//!
//! - Settings absent from the file keep their defaults.
//! - A key in the file with no declared setting is an error naming its dotted path.
//! - A value that cannot be converted to its setting's type is an error naming the setting.
//! - Loading stops at the first error; values set before it are kept.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML document support (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tomlcfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let country = tomlcfg::declare_string("country", "Unknown");
//! let population = tomlcfg::declare_int("atlanta.population", 0);
//!
//! tomlcfg::parse("/path/to/myconfig.conf")?;
//! println!("{} has {} people", country.get(), population.get());
//!
//! // Separate registries for separate files
//! let network = Registry::new("network settings", ErrorPolicy::ExitOnError);
//! let host = network.declare_string("host", "localhost");
//! let port = network.declare_int("port", 8080);
//! network.parse("/path/to/network.conf")?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod global;
pub mod ports;
pub mod service;

pub use global::{
    declare_bool, declare_duration, declare_float64, declare_int, declare_int64, declare_string,
    declare_uint, declare_uint64, default_registry, parse,
};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigNode, ConfigTree, ConfigValue, ErrorPolicy, Handle, Kind,
        Result, Setting,
    };
    pub use crate::ports::ConfigParser;
    pub use crate::service::Registry;

    pub use crate::adapters::TomlParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
