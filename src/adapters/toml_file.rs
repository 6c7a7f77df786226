// SPDX-License-Identifier: MIT OR Apache-2.0

//! TOML document parser.

use crate::domain::{ConfigError, ConfigNode, ConfigTree, ConfigValue, Result};
use crate::ports::ConfigParser;

/// TOML parser implementation.
///
/// Tables become nested trees, so `[places.california]` followed by
/// `name = "neat dude"` yields the setting `places.california.name`. Strings
/// are carried verbatim and other scalars in their TOML textual form. Keys
/// come out in lexicographic order within each table.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::adapters::TomlParser;
/// use tomlcfg::domain::ConfigNode;
/// use tomlcfg::ports::ConfigParser;
///
/// let parser = TomlParser::new();
/// let tree = parser.parse("[atlanta]\npopulation = 432427").unwrap();
/// assert!(matches!(tree.get("atlanta"), Some(ConfigNode::Table(_))));
/// ```
#[derive(Debug, Clone)]
pub struct TomlParser;

impl TomlParser {
    /// Creates a new TOML parser.
    pub fn new() -> Self {
        TomlParser
    }

    fn table_to_tree(table: &toml::Table) -> ConfigTree {
        let mut tree = ConfigTree::new();
        for (key, value) in table {
            let node = match value {
                toml::Value::Table(sub) => ConfigNode::Table(Self::table_to_tree(sub)),
                scalar => ConfigNode::Value(Self::scalar_text(scalar)),
            };
            tree.insert(key.as_str(), node);
        }
        tree
    }

    fn scalar_text(value: &toml::Value) -> ConfigValue {
        let text = match value {
            toml::Value::String(s) => s.clone(),
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Datetime(d) => d.to_string(),
            // Arrays keep their inline TOML form
            toml::Value::Array(_) | toml::Value::Table(_) => value.to_string(),
        };
        ConfigValue::new(text)
    }
}

impl Default for TomlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for TomlParser {
    fn parse(&self, content: &str) -> Result<ConfigTree> {
        let table: toml::Table = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
            source: Some(Box::new(e)),
        })?;
        Ok(Self::table_to_tree(&table))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["toml", "conf", "cfg"]
    }

    fn format_name(&self) -> &'static str {
        "TOML"
    }

    fn syntax_help(&self) -> &'static str {
        "https://toml.io"
    }
}
