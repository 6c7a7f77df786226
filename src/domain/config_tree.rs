// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed form of a configuration document.
//!
//! A [`ConfigTree`] is an ordered list of named nodes. Each node is either a
//! scalar, already rendered to text, or a nested tree for a section. Parsers
//! build trees; the registry only reads them.

use crate::domain::ConfigValue;

/// A node of a parsed configuration document.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigNode {
    /// A leaf value in its textual form.
    Value(ConfigValue),
    /// A nested section.
    Table(ConfigTree),
}

/// A section of a parsed configuration document.
///
/// Entries keep the order in which the parser produced them.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::{ConfigNode, ConfigTree};
///
/// let tree = ConfigTree::new()
///     .with_value("country", "USA")
///     .with_table("atlanta", ConfigTree::new().with_value("population", "432427"));
///
/// assert_eq!(tree.len(), 2);
/// assert!(matches!(tree.get("atlanta"), Some(ConfigNode::Table(_))));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigTree {
    entries: Vec<(String, ConfigNode)>,
}

impl ConfigTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, replacing any existing node with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, node: ConfigNode) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = node,
            None => self.entries.push((name, node)),
        }
    }

    /// Builder form of [`insert`](Self::insert) for a scalar.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(name, ConfigNode::Value(value.into()));
        self
    }

    /// Builder form of [`insert`](Self::insert) for a section.
    pub fn with_table(mut self, name: impl Into<String>, table: ConfigTree) -> Self {
        self.insert(name, ConfigNode::Table(table));
        self
    }

    /// Looks up a direct child by name.
    pub fn get(&self, name: &str) -> Option<&ConfigNode> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, node)| node)
    }

    /// Iterates over the direct children in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the tree has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let tree = ConfigTree::new()
            .with_value("zebra", "1")
            .with_value("apple", "2");
        let names: Vec<&str> = tree.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut tree = ConfigTree::new()
            .with_value("first", "1")
            .with_value("second", "2");
        tree.insert("first", ConfigNode::Value(ConfigValue::from("3")));

        assert_eq!(tree.len(), 2);
        let (name, node) = tree.iter().next().unwrap();
        assert_eq!(name, "first");
        assert_eq!(node, &ConfigNode::Value(ConfigValue::from("3")));
    }

    #[test]
    fn test_get_missing() {
        let tree = ConfigTree::new();
        assert!(tree.is_empty());
        assert!(tree.get("nope").is_none());
    }

    #[test]
    fn test_nested_tables() {
        let tree = ConfigTree::new().with_table(
            "places",
            ConfigTree::new().with_table("california", ConfigTree::new().with_value("name", "neat dude")),
        );

        let Some(ConfigNode::Table(places)) = tree.get("places") else {
            panic!("places should be a table");
        };
        let Some(ConfigNode::Table(california)) = places.get("california") else {
            panic!("california should be a table");
        };
        assert_eq!(
            california.get("name"),
            Some(&ConfigNode::Value(ConfigValue::from("neat dude")))
        );
    }
}
