// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Every failure a load can run into is a variant of [`ConfigError`]. The
//! variants are produced directly by the lookup and conversion code, so the
//! human-readable messages never depend on matching the text of a lower layer.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use std::str::ParseBoolError;
use thiserror::Error;

use crate::domain::duration::DurationParseError;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use tomlcfg::domain::errors::ConfigError;
///
/// let error = ConfigError::UnknownSetting {
///     key: "atlanta.population".to_string(),
/// };
/// assert_eq!(error.to_string(), "atlanta.population is not a valid config setting");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("open {}: {source}", path.display())]
    FileRead {
        /// The path that was being read
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The configuration file is not valid for its document grammar.
    #[error("{} is not a valid {format} file. See {help} for syntax help.", path.display())]
    InvalidDocument {
        /// The path of the offending file
        path: PathBuf,
        /// Human name of the document format, e.g. `TOML`
        format: &'static str,
        /// Where to find the syntax reference for the format
        help: &'static str,
        /// The parser's own error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A dotted path in the document has no declared setting.
    #[error("{key} is not a valid config setting")]
    UnknownSetting {
        /// The dotted path that was not declared
        key: String,
    },

    /// A value could not be converted to the declared type of its setting.
    ///
    /// The message names the setting but not the value; the conversion
    /// failure is available through [`std::error::Error::source`].
    #[error("The value for {key} is invalid")]
    TypeConversionError {
        /// The setting being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A parser failed to read document text.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No configuration directory could be determined for the application.
    #[error("Failed to determine the configuration directory for '{app_name}'")]
    NoConfigDirectory {
        /// The application name used for the lookup
        app_name: String,
    },
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a DurationParseError.
    pub fn from_parse_duration_error(key: String, err: DurationParseError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "duration".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unknown_setting_error() {
        let error = ConfigError::UnknownSetting {
            key: "neat.terrific.rad".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "neat.terrific.rad is not a valid config setting"
        );
    }

    #[test]
    fn test_type_conversion_error_hides_value() {
        let source_error = "notanumber".parse::<i32>().unwrap_err();
        let error = ConfigError::TypeConversionError {
            key: "cool".to_string(),
            target_type: "int".to_string(),
            source: Box::new(source_error),
        };
        assert_eq!(error.to_string(), "The value for cool is invalid");
        assert!(!error.to_string().contains("notanumber"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_file_read_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::FileRead {
            path: PathBuf::from("configs/nope.conf"),
            source: io_error,
        };
        assert_eq!(error.to_string(), "open configs/nope.conf: file not found");
    }

    #[test]
    fn test_invalid_document_error() {
        let error = ConfigError::InvalidDocument {
            path: PathBuf::from("configs/invalid.conf"),
            format: "TOML",
            help: "https://toml.io",
            source: "unexpected character".into(),
        };
        assert_eq!(
            error.to_string(),
            "configs/invalid.conf is not a valid TOML file. See https://toml.io for syntax help."
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "Invalid YAML".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid YAML"
        );
    }

    #[test]
    fn test_from_parse_int_error() {
        let parse_err = "not_a_number".parse::<i32>().unwrap_err();
        let error = ConfigError::from_parse_int_error("test.key".to_string(), parse_err);
        assert!(matches!(
            error,
            ConfigError::TypeConversionError { ref target_type, .. } if target_type == "integer"
        ));
    }

    #[test]
    fn test_from_parse_float_error() {
        let parse_err = "not_a_float".parse::<f64>().unwrap_err();
        let error = ConfigError::from_parse_float_error("test.key".to_string(), parse_err);
        assert!(matches!(
            error,
            ConfigError::TypeConversionError { ref target_type, .. } if target_type == "float"
        ));
    }

    #[test]
    fn test_from_parse_bool_error() {
        let parse_err = "not_a_bool".parse::<bool>().unwrap_err();
        let error = ConfigError::from_parse_bool_error("test.key".to_string(), parse_err);
        assert_eq!(error.to_string(), "The value for test.key is invalid");
    }

    #[test]
    fn test_from_parse_duration_error() {
        let error = ConfigError::from_parse_duration_error(
            "timeout".to_string(),
            DurationParseError::MissingUnit,
        );
        assert!(matches!(
            error,
            ConfigError::TypeConversionError { ref target_type, .. } if target_type == "duration"
        ));
    }
}
