// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reading configuration files from disk.

use crate::domain::{ConfigError, Result};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration files (10MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads the raw bytes of a configuration file.
///
/// Files larger than [`MAX_CONFIG_FILE_SIZE`] are refused. Every failure is
/// reported as [`ConfigError::FileRead`] carrying the path as given. The
/// content is not checked for UTF-8 here; that is a property of the document.
///
/// # Examples
///
/// ```rust,no_run
/// use tomlcfg::adapters::file::read_config_file;
///
/// let content = read_config_file("/etc/myapp/config.toml".as_ref()).unwrap();
/// ```
pub fn read_config_file(path: &Path) -> Result<Vec<u8>> {
    let read_error = |source: io::Error| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(read_error)?;
    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(read_error(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
        )));
    }

    let content = fs::read(path).map_err(read_error)?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Returns the path of `filename` inside the OS-appropriate configuration
/// directory for an application.
///
/// # Arguments
///
/// * `app_name` - The application name (e.g., "myapp")
/// * `qualifier` - The organization/qualifier (e.g., "com.example")
/// * `filename` - The configuration file name (e.g., "config.toml")
///
/// # Examples
///
/// ```rust,no_run
/// use tomlcfg::adapters::file::default_config_path;
///
/// let path = default_config_path("myapp", "com.example", "config.toml").unwrap();
/// assert!(path.ends_with("config.toml"));
/// ```
pub fn default_config_path(app_name: &str, qualifier: &str, filename: &str) -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::NoConfigDirectory {
            app_name: app_name.to_string(),
        })?;

    Ok(proj_dirs.config_dir().join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "country = \"USA\"").unwrap();

        let content = read_config_file(temp_file.path()).unwrap();
        assert_eq!(content, b"country = \"USA\"");
    }

    #[test]
    fn test_read_non_utf8_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"name = \"\xff\xfe\"").unwrap();

        let content = read_config_file(temp_file.path()).unwrap();
        assert_eq!(content.len(), 11);
    }

    #[test]
    fn test_read_missing_file() {
        let path = Path::new("/nonexistent/path/to/config.toml");
        let err = read_config_file(path).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::FileRead { ref source, .. } if source.kind() == io::ErrorKind::NotFound
        ));
        assert!(err
            .to_string()
            .starts_with("open /nonexistent/path/to/config.toml: "));
    }

    #[test]
    fn test_read_oversized_file() {
        let temp_file = NamedTempFile::new().unwrap();
        temp_file
            .as_file()
            .set_len(MAX_CONFIG_FILE_SIZE + 1)
            .unwrap();

        let err = read_config_file(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("configuration file too large"));
    }

    #[test]
    fn test_default_config_path_uses_filename() {
        if let Ok(path) = default_config_path("tomlcfg-test", "com.example", "settings.toml") {
            assert!(path.ends_with("settings.toml"));
        }
    }
}
