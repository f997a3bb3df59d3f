//! Configuration file loading and management
//!
//! This module handles loading and parsing the plugin configuration from
//! `$XDG_CONFIG_HOME/ponder/config.toml`. If the configuration file doesn't
//! exist, a default configuration is created with documented comments.
//!
//! [`ConfigService`] wraps a loaded [`Config`] together with the file it came
//! from and exposes the free-form `[options]` table to plugins.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main plugin configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Plugin identity and logging
    #[serde(default)]
    pub plugin: PluginConfig,
    /// Durable storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Periodic autosave configuration
    #[serde(default)]
    pub autosave: AutosaveConfig,
    /// Color resolution configuration
    #[serde(default)]
    pub colors: ColorConfig,
    /// Plugin-defined options as arbitrary TOML values
    #[serde(default)]
    pub options: toml::Table,
}

/// Plugin identity configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PluginConfig {
    /// Plugin name, also used as the storage collection name
    /// Default: "ponder"
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    /// Default: "info"
    pub log_level: String,
    /// Verbose diagnostics for plugin developers
    /// Default: false
    pub debug: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageConfig {
    /// Path to the storage database (SQLite)
    /// If None, uses XDG_DATA_HOME/ponder/storage.db
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Autosave configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AutosaveConfig {
    /// Whether the hourly autosave is scheduled at startup
    /// Default: true
    pub enabled: bool,
}

/// Color resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    /// Whether the host palette is consulted after the general color table
    /// Default: true
    pub host_table: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            name: "ponder".to_string(),
            log_level: "info".to_string(),
            debug: false,
        }
    }
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { host_table: true }
    }
}

impl Config {
    /// Load configuration from the specified path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path
    ///
    /// Returns `$XDG_CONFIG_HOME/ponder/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "preponderous", "ponder")
            .context("Failed to determine project directories")?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Create a default configuration file with documented comments
    fn create_default_file(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::default_config_content())
            .with_context(|| format!("Failed to write default config file: {}", path.display()))?;

        tracing::info!("Created default configuration file at: {}", path.display());
        Ok(())
    }

    /// Generate the default configuration file content with comments
    fn default_config_content() -> &'static str {
        r#"# Ponder Configuration

[plugin]
# Plugin name. Also used as the storage collection name.
name = "ponder"

# Log level: trace, debug, info, warn, error
# Default: "info"
log_level = "info"

# Verbose diagnostics for plugin developers
debug = false

[storage]
# Path to the SQLite storage database
# If not specified, defaults to $XDG_DATA_HOME/ponder/storage.db
# path = "/path/to/storage.db"

[autosave]
# Save all entities every hour (first save one hour after startup)
enabled = true

[colors]
# Consult the host palette when a name is not a preset or web color
host_table = true

# Free-form plugin options
[options]
# motd = "Welcome!"
# max_homes = 3
"#
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.plugin.name.trim().is_empty() {
            anyhow::bail!("plugin.name must not be empty");
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.plugin.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log_level: {}. Must be one of: {}",
                self.plugin.log_level,
                valid_log_levels.join(", ")
            );
        }

        Ok(())
    }

    /// Get the storage database path
    ///
    /// Returns the configured path or the default XDG data directory path
    pub fn storage_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.storage.path {
            return Ok(path.clone());
        }

        let dirs = directories::ProjectDirs::from("", "preponderous", "ponder")
            .context("Failed to determine project directories")?;

        Ok(dirs.data_dir().join("storage.db"))
    }
}

// ============================================================================
// ConfigService
// ============================================================================

/// Owns the active configuration and the file it is persisted to.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    config: Config,
}

impl ConfigService {
    /// Wrap an in-memory configuration that is never written to disk.
    pub fn new(config: Config) -> Self {
        Self { path: None, config }
    }

    /// Load from the given file.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = Config::load(&path)?;
        Ok(Self {
            path: Some(path),
            config,
        })
    }

    /// Load from the default XDG location, writing a documented default file first
    /// if none exists.
    pub fn load_default() -> Result<Self> {
        let path = Config::default_config_path()?;
        if !path.exists() {
            Config::create_default_file(&path)?;
        }
        Self::load(path)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get_option(&self, key: &str) -> Option<&toml::Value> {
        self.config.options.get(key)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get_option(key).and_then(toml::Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_option(key).and_then(toml::Value::as_bool)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get_option(key).and_then(toml::Value::as_integer)
    }

    /// Set a plugin option, returning the previous value.
    pub fn set_option(&mut self, key: &str, value: impl Into<toml::Value>) -> Option<toml::Value> {
        self.config.options.insert(key.to_string(), value.into())
    }

    /// Write the current configuration back to its file.
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .context("Configuration has no backing file")?;

        let content = toml::to_string_pretty(&self.config).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Re-read the backing file, discarding unsaved changes.
    pub fn reload(&mut self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .context("Configuration has no backing file")?;

        self.config = Config::load(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.plugin.name, "ponder");
        assert_eq!(config.plugin.log_level, "info");
        assert!(!config.plugin.debug);
        assert!(config.storage.path.is_none());
        assert!(config.autosave.enabled);
        assert!(config.colors.host_table);
        assert!(config.options.is_empty());
    }

    #[test]
    fn test_default_file_content_parses() {
        let config: Config = toml::from_str(Config::default_config_content()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[plugin]
name = "medieval-factions"
log_level = "debug"
debug = true

[storage]
path = "/srv/plugins/factions.db"

[autosave]
enabled = false

[colors]
host_table = false

[options]
max_power = 20
territory_color = "dark_red"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.plugin.name, "medieval-factions");
        assert_eq!(config.plugin.log_level, "debug");
        assert!(config.plugin.debug);
        assert_eq!(
            config.storage.path,
            Some(PathBuf::from("/srv/plugins/factions.db"))
        );
        assert!(!config.autosave.enabled);
        assert!(!config.colors.host_table);
        assert_eq!(config.options.len(), 2);
    }

    #[test]
    fn test_load_minimal_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"").unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/ponder/config.toml").is_err());
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.plugin.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut config = Config::default();
        config.plugin.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_storage_path_default() {
        let config = Config::default();
        let path = config.storage_path().unwrap();
        assert!(path.to_string_lossy().contains("ponder"));
        assert!(path.to_string_lossy().ends_with("storage.db"));
    }

    #[test]
    fn test_storage_path_custom() {
        let mut config = Config::default();
        let custom = PathBuf::from("/custom/path/storage.db");
        config.storage.path = Some(custom.clone());
        assert_eq!(config.storage_path().unwrap(), custom);
    }

    #[test]
    fn test_full_config_roundtrip() {
        let mut config = Config::default();
        config.plugin.log_level = "debug".to_string();
        config
            .options
            .insert("motd".to_string(), toml::Value::String("hi".to_string()));

        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_service_option_accessors() {
        let mut service = ConfigService::new(Config::default());
        assert!(service.get_string("motd").is_none());

        service.set_option("motd", "Welcome");
        service.set_option("pvp", true);
        service.set_option("max_homes", 3);

        assert_eq!(service.get_string("motd"), Some("Welcome"));
        assert_eq!(service.get_bool("pvp"), Some(true));
        assert_eq!(service.get_int("max_homes"), Some(3));
        // Wrong type yields None rather than a coercion.
        assert_eq!(service.get_int("motd"), None);
    }

    #[test]
    fn test_service_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, Config::default_config_content()).unwrap();

        let mut service = ConfigService::load(&path).unwrap();
        service.set_option("max_homes", 5);
        service.save().unwrap();

        let reloaded = ConfigService::load(&path).unwrap();
        assert_eq!(reloaded.get_int("max_homes"), Some(5));

        service.set_option("max_homes", 9);
        service.reload().unwrap();
        assert_eq!(service.get_int("max_homes"), Some(5));
    }

    #[test]
    fn test_in_memory_service_cannot_save() {
        let service = ConfigService::new(Config::default());
        assert!(service.path().is_none());
        assert!(service.save().is_err());
    }
}
