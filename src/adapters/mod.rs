// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing document parsers and file access.
//!
//! This module contains concrete implementations of the [`ConfigParser`] port,
//! one per supported document format, plus helpers for locating and reading
//! configuration files.

pub mod file;
pub mod toml_file;
#[cfg(feature = "yaml")]
pub mod yaml_file;

use crate::ports::ConfigParser;
use std::path::Path;

pub use toml_file::TomlParser;
#[cfg(feature = "yaml")]
pub use yaml_file::YamlParser;

/// Selects a parser from a file's extension.
///
/// YAML extensions pick [`YamlParser`] when the `yaml` feature is enabled;
/// every other file, including files without an extension, is read as TOML.
pub fn parser_for(path: &Path) -> Box<dyn ConfigParser> {
    #[cfg(feature = "yaml")]
    {
        let yaml = YamlParser::new();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| yaml.supports_extension(ext));
        if is_yaml {
            return Box::new(yaml);
        }
    }
    #[cfg(not(feature = "yaml"))]
    let _ = path;

    Box::new(TomlParser::new())
}
