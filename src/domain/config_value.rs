// SPDX-License-Identifier: MIT OR Apache-2.0

//! Textual setting values with type-safe conversions.
//!
//! Document scalars reach the registry as text. [`ConfigValue`] carries that
//! text and knows how to convert it into each supported setting type.

use crate::domain::duration::parse_duration;
use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::time::Duration;

/// A type-safe wrapper for setting values in their textual form.
///
/// Every conversion takes the name of the setting being converted so that
/// failures can report which setting was wrong.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::new("42".to_string());
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.as_i64("my_bigint").unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "t", "yes", "1", "on"
    /// - `false`: "false", "f", "no", "0", "off"
    ///
    /// # Examples
    ///
    /// ```
    /// use tomlcfg::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("true").as_bool("my_bool").unwrap(), true);
    /// assert_eq!(ConfigValue::from("Off").as_bool("my_bool").unwrap(), false);
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "t" | "yes" | "1" | "on" => Ok(true),
            "false" | "f" | "no" | "0" | "off" => Ok(false),
            _ => self
                .0
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Converts the value to a platform-width `isize`.
    pub fn as_isize(&self, key: &str) -> Result<isize> {
        self.0
            .parse::<isize>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tomlcfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("-23");
    /// assert_eq!(value.as_i64("my_bigint").unwrap(), -23);
    /// ```
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a platform-width `usize`.
    pub fn as_usize(&self, key: &str) -> Result<usize> {
        self.0
            .parse::<usize>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.0
            .parse::<u64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.0
            .parse::<f64>()
            .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e))
    }

    /// Converts the value to a [`Duration`], e.g. `"1m30s"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use tomlcfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("1m30s");
    /// assert_eq!(value.as_duration("timeout").unwrap(), Duration::from_secs(90));
    /// ```
    pub fn as_duration(&self, key: &str) -> Result<Duration> {
        parse_duration(&self.0).map_err(|e| ConfigError::from_parse_duration_error(key.to_string(), e))
    }

}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
