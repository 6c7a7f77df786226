// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser.

use crate::domain::{ConfigError, ConfigNode, ConfigTree, ConfigValue, Result};
use crate::ports::ConfigParser;

/// YAML parser implementation.
///
/// Mappings become nested trees and sequences become trees keyed by index,
/// so the second entry of `servers` is the setting `servers.1`. Keys keep
/// their document order. Custom tags such as `!secret` are dropped and the
/// tagged value is used; mapping keys must be scalars.
///
/// # Examples
///
/// ```rust
/// use tomlcfg::adapters::YamlParser;
/// use tomlcfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "database:\n  host: localhost\n  port: 5432";
/// let tree = parser.parse(yaml_content).unwrap();
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn mapping_to_tree(map: &serde_yaml::Mapping) -> Result<ConfigTree> {
        let mut tree = ConfigTree::new();
        for (key, value) in map {
            tree.insert(Self::key_text(key)?, Self::to_node(value)?);
        }
        Ok(tree)
    }

    fn key_text(key: &serde_yaml::Value) -> Result<String> {
        match key {
            serde_yaml::Value::String(s) => Ok(s.clone()),
            serde_yaml::Value::Number(n) => Ok(n.to_string()),
            serde_yaml::Value::Bool(b) => Ok(b.to_string()),
            serde_yaml::Value::Tagged(tagged) => Self::key_text(&tagged.value),
            other => Err(ConfigError::ParseError {
                message: format!("unsupported YAML mapping key: {:?}", other),
                source: None,
            }),
        }
    }

    fn to_node(value: &serde_yaml::Value) -> Result<ConfigNode> {
        let node = match value {
            serde_yaml::Value::Mapping(map) => ConfigNode::Table(Self::mapping_to_tree(map)?),
            serde_yaml::Value::Sequence(seq) => {
                let mut tree = ConfigTree::new();
                for (i, item) in seq.iter().enumerate() {
                    tree.insert(i.to_string(), Self::to_node(item)?);
                }
                ConfigNode::Table(tree)
            }
            serde_yaml::Value::String(s) => ConfigNode::Value(ConfigValue::from(s.as_str())),
            serde_yaml::Value::Number(n) => ConfigNode::Value(ConfigValue::new(n.to_string())),
            serde_yaml::Value::Bool(b) => ConfigNode::Value(ConfigValue::new(b.to_string())),
            serde_yaml::Value::Null => ConfigNode::Value(ConfigValue::new(String::new())),
            serde_yaml::Value::Tagged(tagged) => return Self::to_node(&tagged.value),
        };
        Ok(node)
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<ConfigTree> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match value {
            serde_yaml::Value::Mapping(map) => Self::mapping_to_tree(&map),
            serde_yaml::Value::Null => Ok(ConfigTree::new()),
            _ => Err(ConfigError::ParseError {
                message: "the top level of a YAML configuration must be a mapping".to_string(),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn format_name(&self) -> &'static str {
        "YAML"
    }

    fn syntax_help(&self) -> &'static str {
        "https://yaml.org"
    }
}
