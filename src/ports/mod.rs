// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! Ports are the interfaces the registry depends on. Document formats are
//! plugged in by implementing [`ConfigParser`].

pub mod parser;

// Re-export commonly used traits
pub use parser::ConfigParser;
