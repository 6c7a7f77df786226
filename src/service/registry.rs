// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed settings registry.
//!
//! A [`Registry`] holds named settings, each declared once with a type and a
//! default. Loading a configuration file overlays the values it contains onto
//! the declared settings; settings the file does not mention keep their
//! defaults.

use crate::adapters::{self, file};
use crate::domain::setting::Slot;
use crate::domain::{
    ConfigError, ConfigKey, ConfigTree, ConfigValue, ErrorPolicy, Handle, Kind, Result, Setting,
};
use crate::ports::ConfigParser;
use crate::service::overlay;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// A named collection of typed settings with an error policy.
///
/// Declarations and loads take `&self`, so a registry can live in a `static`.
/// They are expected to happen during start-up, before other threads read the
/// returned handles.
///
/// # Examples
///
/// ```rust
/// use std::io::Write;
/// use tomlcfg::prelude::*;
///
/// # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let registry = Registry::new("network settings", ErrorPolicy::ContinueOnError);
/// let host = registry.declare_string("host", "localhost");
/// let port = registry.declare_int("port", 8080);
///
/// let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
/// writeln!(file, "port = 9090")?;
/// registry.parse(file.path())?;
///
/// assert_eq!(host.get(), "localhost");
/// assert_eq!(port.get(), 9090);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Registry {
    /// Name used in diagnostics
    name: String,
    /// Reaction to failed assignments
    policy: ErrorPolicy,
    /// Declared settings by dotted name
    settings: RwLock<HashMap<ConfigKey, Setting>>,
}

impl Registry {
    /// Creates an empty registry.
    ///
    /// # Arguments
    ///
    /// * `name` - Name used in diagnostics
    /// * `policy` - How failed assignments are handled
    pub fn new(name: impl Into<String>, policy: ErrorPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
            settings: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the registry's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registry's error policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Declares a `bool` setting.
    pub fn declare_bool(&self, name: &str, default: bool) -> Handle<bool> {
        self.declare(name, default)
    }

    /// Declares a platform-width signed integer setting.
    pub fn declare_int(&self, name: &str, default: isize) -> Handle<isize> {
        self.declare(name, default)
    }

    /// Declares an `i64` setting.
    pub fn declare_int64(&self, name: &str, default: i64) -> Handle<i64> {
        self.declare(name, default)
    }

    /// Declares a platform-width unsigned integer setting.
    pub fn declare_uint(&self, name: &str, default: usize) -> Handle<usize> {
        self.declare(name, default)
    }

    /// Declares a `u64` setting.
    pub fn declare_uint64(&self, name: &str, default: u64) -> Handle<u64> {
        self.declare(name, default)
    }

    /// Declares a string setting.
    pub fn declare_string(&self, name: &str, default: impl Into<String>) -> Handle<String> {
        self.declare(name, default.into())
    }

    /// Declares an `f64` setting.
    pub fn declare_float64(&self, name: &str, default: f64) -> Handle<f64> {
        self.declare(name, default)
    }

    /// Declares a [`Duration`] setting. Values are written like `1m30s`.
    pub fn declare_duration(&self, name: &str, default: Duration) -> Handle<Duration> {
        self.declare(name, default)
    }

    /// Registers a new slot under `name`.
    ///
    /// Declaring a name that already exists replaces the earlier setting.
    /// Handles returned by the earlier declaration stop receiving updates.
    fn declare<T>(&self, name: &str, default: T) -> Handle<T>
    where
        Handle<T>: Into<Slot>,
    {
        let handle = Handle::new(default);
        let key = ConfigKey::from(name);
        let setting = Setting::new(key.clone(), handle.clone().into());
        tracing::debug!(
            "Declared {} setting '{}' with default '{}' in registry '{}'",
            setting.kind(),
            key,
            setting.default_value(),
            self.name
        );

        if let Some(previous) = self.write_settings().insert(key, setting) {
            tracing::warn!(
                "Setting '{}' was declared twice in registry '{}'; the {} declaration was replaced",
                previous.key(),
                self.name,
                previous.kind()
            );
        }
        handle
    }

    /// Converts `text` to the declared type of `name` and stores it.
    ///
    /// On failure the registry's [`ErrorPolicy`] is applied first; with
    /// [`ErrorPolicy::ContinueOnError`] the error is then returned.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::UnknownSetting`] - `name` was never declared
    /// * [`ConfigError::TypeConversionError`] - `text` is not valid for the setting's type
    pub fn set_from_text(&self, name: &str, text: &str) -> Result<()> {
        let result = self.assign(name, text);
        if let Err(ref error) = result {
            self.policy.handle(&self.name, error);
        }
        result
    }

    fn assign(&self, name: &str, text: &str) -> Result<()> {
        let settings = self.read_settings();
        let setting = settings
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSetting {
                key: name.to_string(),
            })?;
        setting.assign(&ConfigValue::from(text))
    }

    /// Returns `true` if `name` has been declared.
    pub fn contains(&self, name: &str) -> bool {
        self.read_settings().contains_key(name)
    }

    /// Returns the declared type of `name`.
    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.read_settings().get(name).map(Setting::kind)
    }

    /// Returns the current value of `name` as text.
    pub fn lookup(&self, name: &str) -> Option<ConfigValue> {
        self.read_settings().get(name).map(Setting::current_value)
    }

    /// Number of declared settings.
    pub fn len(&self) -> usize {
        self.read_settings().len()
    }

    /// Returns `true` if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.read_settings().is_empty()
    }

    /// Calls `f` for every declared setting in lexicographic name order.
    ///
    /// `f` must not declare settings on this registry.
    pub fn visit(&self, mut f: impl FnMut(&Setting)) {
        let settings = self.read_settings();
        let mut ordered: Vec<&Setting> = settings.values().collect();
        ordered.sort_by(|a, b| a.key().cmp(b.key()));
        for setting in ordered {
            f(setting);
        }
    }

    /// Overlays a parsed document onto the declared settings.
    ///
    /// Stops at the first scalar that names an undeclared setting or cannot
    /// be converted. Values set before that point are kept.
    pub fn load_tree(&self, tree: &ConfigTree) -> Result<()> {
        overlay::overlay(self, tree)
    }

    /// Loads a configuration file, choosing the parser from its extension.
    ///
    /// `.yaml` and `.yml` files are read as YAML when the `yaml` feature is
    /// enabled; everything else is read as TOML.
    ///
    /// This must be called after the settings have been declared and before
    /// their handles are read.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::FileRead`] - the file could not be read
    /// * [`ConfigError::InvalidDocument`] - the file is not UTF-8 or not valid for its format
    /// * [`ConfigError::UnknownSetting`] / [`ConfigError::TypeConversionError`] - see [`Registry::load_tree`]
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let parser = adapters::parser_for(path);
        self.parse_with(path, parser.as_ref())
    }

    /// Loads a configuration file with an explicit parser.
    pub fn parse_with(&self, path: impl AsRef<Path>, parser: &dyn ConfigParser) -> Result<()> {
        let path = path.as_ref();
        let invalid = |source: Box<dyn std::error::Error + Send + Sync>| {
            ConfigError::InvalidDocument {
                path: path.to_path_buf(),
                format: parser.format_name(),
                help: parser.syntax_help(),
                source,
            }
        };

        let bytes = file::read_config_file(path)?;
        let content = String::from_utf8(bytes).map_err(|e| invalid(Box::new(e)))?;
        let tree = parser.parse(&content).map_err(|e| invalid(Box::new(e)))?;

        tracing::debug!(
            "Loading {} into registry '{}' as {}",
            path.display(),
            self.name,
            parser.format_name()
        );
        self.load_tree(&tree)
    }

    /// Loads `filename` from the OS-appropriate configuration directory of an
    /// application.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use tomlcfg::prelude::*;
    ///
    /// let registry = Registry::new("myapp", ErrorPolicy::ContinueOnError);
    /// let workers = registry.declare_uint("workers", 4);
    /// registry.parse_default("myapp", "com.example", "config.toml").unwrap();
    /// ```
    pub fn parse_default(&self, app_name: &str, qualifier: &str, filename: &str) -> Result<()> {
        let path = file::default_config_path(app_name, qualifier, filename)?;
        self.parse(path)
    }

    fn read_settings(&self) -> std::sync::RwLockReadGuard<'_, HashMap<ConfigKey, Setting>> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_settings(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<ConfigKey, Setting>> {
        self.settings.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::new("App Config", ErrorPolicy::ContinueOnError)
    }

    #[test]
    fn test_new_registry() {
        let registry = Registry::new("network settings", ErrorPolicy::ExitOnError);
        assert_eq!(registry.name(), "network settings");
        assert_eq!(registry.policy(), ErrorPolicy::ExitOnError);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_declarations_start_at_default() {
        let registry = registry();
        let my_bool = registry.declare_bool("my_bool", true);
        let my_int = registry.declare_int("my_int", -1);
        let my_bigint = registry.declare_int64("my_bigint", i64::MIN);
        let my_uint = registry.declare_uint("my_uint", 3);
        let my_biguint = registry.declare_uint64("my_biguint", u64::MAX);
        let my_string = registry.declare_string("my_string", "nope");
        let my_float = registry.declare_float64("my_bigfloat", 0.25);
        let timeout = registry.declare_duration("timeout", Duration::from_secs(5));

        assert!(my_bool.get());
        assert_eq!(my_int.get(), -1);
        assert_eq!(my_bigint.get(), i64::MIN);
        assert_eq!(my_uint.get(), 3);
        assert_eq!(my_biguint.get(), u64::MAX);
        assert_eq!(my_string.get(), "nope");
        assert_eq!(my_float.get(), 0.25);
        assert_eq!(timeout.get(), Duration::from_secs(5));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_set_from_text() {
        let registry = registry();
        let population = registry.declare_int("atlanta.population", 0);

        registry.set_from_text("atlanta.population", "432427").unwrap();
        assert_eq!(population.get(), 432427);
    }

    #[test]
    fn test_set_from_text_unknown() {
        let registry = registry();
        let err = registry.set_from_text("my_bool", "true").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSetting { ref key } if key == "my_bool"));
    }

    #[test]
    fn test_set_from_text_mismatch() {
        let registry = registry();
        let cool = registry.declare_int("cool", 10);

        let err = registry.set_from_text("cool", "notanumber").unwrap_err();
        assert_eq!(err.to_string(), "The value for cool is invalid");
        assert_eq!(cool.get(), 10);
    }

    #[test]
    fn test_set_from_text_width_checked() {
        let registry = registry();
        registry.declare_uint64("my_biguint", 0);
        registry.declare_uint("my_uint", 0);

        assert!(registry.set_from_text("my_biguint", "18446744073709551616").is_err());
        assert!(registry.set_from_text("my_uint", "-1").is_err());
    }

    #[test]
    #[should_panic(expected = "The value for cool is invalid")]
    fn test_panic_policy() {
        let registry = Registry::new("strict", ErrorPolicy::PanicOnError);
        registry.declare_int("cool", 10);
        let _ = registry.set_from_text("cool", "notanumber");
    }

    #[test]
    fn test_redeclaration_replaces() {
        let registry = registry();
        let old = registry.declare_int("port", 80);
        let new = registry.declare_string("port", "http");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.kind_of("port"), Some(Kind::String));

        registry.set_from_text("port", "https").unwrap();
        assert_eq!(new.get(), "https");
        assert_eq!(old.get(), 80);
    }

    #[test]
    fn test_lookup_and_contains() {
        let registry = registry();
        registry.declare_duration("timeout", Duration::from_millis(1500));

        assert!(registry.contains("timeout"));
        assert!(!registry.contains("timeouts"));
        assert_eq!(registry.lookup("timeout"), Some(ConfigValue::from("1.5s")));
        assert_eq!(registry.lookup("missing"), None);
    }

    #[test]
    fn test_visit_in_name_order() {
        let registry = registry();
        registry.declare_string("section.name", "");
        registry.declare_bool("my_bool", false);
        registry.declare_string("country", "Unknown");
        registry.set_from_text("my_bool", "true").unwrap();

        let mut seen = Vec::new();
        registry.visit(|setting| {
            seen.push((setting.key().to_string(), setting.is_overridden()));
        });

        assert_eq!(
            seen,
            vec![
                ("country".to_string(), false),
                ("my_bool".to_string(), true),
                ("section.name".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_parse_with_reports_invalid_document() {
        use std::io::Write;

        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        write!(temp_file, "[broken").unwrap();

        let registry = registry();
        let err = registry
            .parse_with(temp_file.path(), &adapters::TomlParser::new())
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidDocument { format: "TOML", .. }));
        assert_eq!(
            err.to_string(),
            format!(
                "{} is not a valid TOML file. See https://toml.io for syntax help.",
                temp_file.path().display()
            )
        );
    }
}
