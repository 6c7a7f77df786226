// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module defines the fundamental concepts of the crate: setting names
//! and textual values, the parsed document tree, typed setting slots, error
//! policies and errors. It has no knowledge of files or document formats.

pub mod config_key;
pub mod config_tree;
pub mod config_value;
pub mod duration;
pub mod errors;
pub mod policy;
pub mod setting;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_tree::{ConfigNode, ConfigTree};
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use policy::ErrorPolicy;
pub use setting::{Handle, Kind, Setting};
