// SPDX-License-Identifier: MIT OR Apache-2.0

//! Overlaying a parsed document onto a registry.
//!
//! The walk is depth-first. Each scalar's dotted name is the path of section
//! names leading to it, and the first failure stops the walk. Settings
//! overlaid before the failure keep their new values.

use crate::domain::{ConfigKey, ConfigNode, ConfigTree, Result};
use crate::service::Registry;

/// Walks `tree` and sets every scalar it contains on `registry`.
pub(crate) fn overlay(registry: &Registry, tree: &ConfigTree) -> Result<()> {
    let mut path = Vec::new();
    walk(registry, tree, &mut path)
}

fn walk<'a>(registry: &Registry, tree: &'a ConfigTree, path: &mut Vec<&'a str>) -> Result<()> {
    for (name, node) in tree.iter() {
        path.push(name);
        let outcome = match node {
            ConfigNode::Table(sub) => walk(registry, sub, path),
            ConfigNode::Value(value) => {
                let key = ConfigKey::from_segments(path.iter());
                tracing::debug!("Overlaying '{}' in registry '{}'", key, registry.name());
                registry.set_from_text(key.as_str(), value.as_str())
            }
        };
        path.pop();
        outcome?;
    }
    Ok(())
}
