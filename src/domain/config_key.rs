// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted setting names.
//!
//! A [`ConfigKey`] names exactly one setting. Nested document sections map to
//! `.`-separated segments, so the `name` key inside `[places.california]` is
//! the key `places.california.name`.

use std::borrow::Borrow;
use std::fmt;

/// The hierarchy separator used in setting names.
pub const SEPARATOR: char = '.';

/// A type-safe wrapper for setting names.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from_segments(["atlanta", "population"]);
/// assert_eq!(key.as_str(), "atlanta.population");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Joins path segments with the hierarchy separator.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = String::new();
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                key.push(SEPARATOR);
            }
            key.push_str(segment.as_ref());
        }
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
