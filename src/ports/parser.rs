// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! parsing configuration documents in different formats (TOML, YAML, etc.).

use crate::domain::{ConfigTree, Result};

/// A trait for parsing configuration documents.
///
/// A parser turns raw document text into a [`ConfigTree`]. Sections become
/// nested tables and scalars are rendered to their natural textual form:
/// booleans as `true`/`false`, numbers in canonical decimal form and strings
/// verbatim. Flattening into dotted names is left to the registry.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::domain::{ConfigTree, Result};
/// use tomlcfg::ports::ConfigParser;
///
/// struct KeyValueParser;
///
/// impl ConfigParser for KeyValueParser {
///     fn parse(&self, content: &str) -> Result<ConfigTree> {
///         let mut tree = ConfigTree::new();
///         for line in content.lines() {
///             if let Some((key, value)) = line.split_once('=') {
///                 tree = tree.with_value(key.trim(), value.trim());
///             }
///         }
///         Ok(tree)
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
///
///     fn format_name(&self) -> &'static str {
///         "key-value"
///     }
///
///     fn syntax_help(&self) -> &'static str {
///         "https://example.com/kv"
///     }
/// }
///
/// let tree = KeyValueParser.parse("port = 8080").unwrap();
/// assert_eq!(tree.len(), 1);
/// ```
pub trait ConfigParser {
    /// Parses document content into a tree.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigTree)` - The parsed document
    /// * `Err(ConfigError::ParseError)` - The content is not valid for this format
    fn parse(&self, content: &str) -> Result<ConfigTree>;

    /// Returns the file extensions supported by this parser, without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Human name of the format, used in error messages.
    fn format_name(&self) -> &'static str;

    /// Where a user can look up the syntax of the format.
    fn syntax_help(&self) -> &'static str;

    /// Returns `true` if this parser claims files with the given extension.
    ///
    /// The comparison ignores ASCII case.
    fn supports_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(extension))
    }
}
