//! TOML-file settings store.
//!
//! Preferences are kept as a flat table in the platform-appropriate file:
//! - Windows:  `%APPDATA%\ReactTestApp\settings.toml`
//! - Linux:    `~/.config/react-test-app/settings.toml`
//! - macOS:    `~/Library/Application Support/ReactTestApp/settings.toml`
//!
//! ```toml
//! breakOnFirstLine = false
//! useDirectDebugger = true
//! useFastRefresh = true
//! useWebDebugger = false
//! ```
//!
//! The file is read on every lookup and rewritten on every store; there is no
//! cache, so two processes sharing the file see each other's writes (last
//! write wins).  Keys this module does not recognise, and values that are not
//! booleans, are preserved on write.  A non-boolean value reads as the
//! caller's default.

use std::path::{Path, PathBuf};

use thiserror::Error;
use toml::{Table, Value};
use tracing::{debug, warn};

use crate::application::settings::SettingsStore;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Determines the platform-appropriate directory for the settings file.
///
/// # Errors
///
/// Returns [`StorageError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn settings_dir() -> Result<PathBuf, StorageError> {
    platform_config_dir().ok_or(StorageError::NoPlatformConfigDir)
}

/// Resolves the full path to the settings file.
///
/// # Errors
///
/// Returns [`StorageError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn settings_file_path() -> Result<PathBuf, StorageError> {
    Ok(settings_dir()?.join("settings.toml"))
}

/// A [`SettingsStore`] persisted to a TOML file.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    /// Uses the file at `path`; it is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses the file in the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoPlatformConfigDir`] if the directory cannot be
    /// determined.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(settings_file_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the table, returning an empty table if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] for file-system errors other than "not
    /// found", and [`StorageError::Parse`] if the TOML is malformed.
    pub fn load(&self) -> Result<Table, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.parse::<Table>()?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Table::new()),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Writes `key = value`, creating the directory and file if needed.
    ///
    /// A malformed existing file is replaced rather than merged.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] for file-system failures or
    /// [`StorageError::Serialize`] if serialization fails.
    pub fn try_set_bool(&self, key: &str, value: bool) -> Result<(), StorageError> {
        let mut table = match self.load() {
            Ok(table) => table,
            Err(StorageError::Parse(e)) => {
                warn!("discarding malformed settings file {}: {e}", self.path.display());
                Table::new()
            }
            Err(e) => return Err(e),
        };
        table.insert(key.to_string(), Value::Boolean(value));

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| StorageError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string(&table)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        let table = match self.load() {
            Ok(table) => table,
            Err(e) => {
                warn!("reading {key} from defaults: {e}");
                return default;
            }
        };
        match table.get(key) {
            Some(Value::Boolean(value)) => *value,
            Some(other) => {
                debug!("{key} holds a {} instead of a boolean", other.type_str());
                default
            }
            None => default,
        }
    }

    fn set_bool(&self, key: &str, value: bool) {
        if let Err(e) = self.try_set_bool(key, value) {
            warn!("failed to persist {key} = {value}: {e}");
        }
    }
}

/// Resolves the platform config directory, including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("ReactTestApp"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("react-test-app"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("ReactTestApp")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("testapp_settings_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_get_bool_returns_default_when_file_absent() {
        // Arrange
        let dir = temp_dir();
        let store = TomlSettingsStore::new(dir.join("settings.toml"));

        // Act / Assert
        assert!(store.get_bool("useFastRefresh", true));
        assert!(!store.get_bool("useWebDebugger", false));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_set_then_get_round_trips_through_file() {
        // Arrange
        let dir = temp_dir();
        let store = TomlSettingsStore::new(dir.join("settings.toml"));

        // Act
        store.set_bool("useDirectDebugger", true);

        // Assert
        assert!(store.get_bool("useDirectDebugger", false));
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("useDirectDebugger = true"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_values_survive_reopening_the_store() {
        let dir = temp_dir();
        let path = dir.join("settings.toml");
        TomlSettingsStore::new(&path).set_bool("useFastRefresh", false);

        let reopened = TomlSettingsStore::new(&path);

        assert!(!reopened.get_bool("useFastRefresh", true));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_non_boolean_value_reads_as_default() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "useWebDebugger = \"yes\"\n").unwrap();
        let store = TomlSettingsStore::new(&path);

        // Act / Assert
        assert!(!store.get_bool("useWebDebugger", false));
        assert!(store.get_bool("useWebDebugger", true));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_malformed_file_reads_as_default() {
        let dir = temp_dir();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "[[[ not valid toml").unwrap();
        let store = TomlSettingsStore::new(&path);

        assert!(store.get_bool("useFastRefresh", true));
        assert!(matches!(store.load(), Err(StorageError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_replaces_malformed_file() {
        let dir = temp_dir();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "[[[ not valid toml").unwrap();
        let store = TomlSettingsStore::new(&path);

        store.set_bool("breakOnFirstLine", true);

        assert!(store.get_bool("breakOnFirstLine", false));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_preserves_unrelated_keys() {
        // Arrange: a key written by some other tool
        let dir = temp_dir();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "theme = \"dark\"\n").unwrap();
        let store = TomlSettingsStore::new(&path);

        // Act
        store.set_bool("useWebDebugger", true);

        // Assert
        let table = store.load().unwrap();
        assert_eq!(table.get("theme").and_then(Value::as_str), Some("dark"));
        assert_eq!(table.get("useWebDebugger").and_then(Value::as_bool), Some(true));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_set_bool_creates_missing_directory() {
        let dir = temp_dir();
        let path = dir.join("nested").join("deeper").join("settings.toml");
        let store = TomlSettingsStore::new(&path);

        store.try_set_bool("useFastRefresh", true).expect("write");

        assert!(path.exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_settings_file_path_ends_with_settings_toml() {
        if let Ok(path) = settings_file_path() {
            assert!(
                path.ends_with("settings.toml"),
                "settings file must be named settings.toml, got {path:?}"
            );
        }
        // NoPlatformConfigDir (e.g. stripped CI env) is also acceptable.
    }
}
