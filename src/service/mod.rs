// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the settings registry.
//!
//! [`Registry`] owns declared settings and loads configuration documents into
//! them through the ports defined in [`crate::ports`].

mod overlay;
pub mod registry;

// Re-export commonly used types
pub use registry::Registry;
