//! Harness configuration.
//!
//! [`HarnessConfig`] collects the few things that differ between a developer
//! machine, CI, and tests: where preferences are stored, where embedded
//! bundles are looked up, and which URL the dev-server probe hits.  The
//! binary fills it from CLI arguments and environment variables; tests build
//! it directly.

use std::path::PathBuf;
use std::sync::Arc;

use testapp_core::DEV_SERVER_STATUS_URL;

use crate::application::settings::SettingsStore;
use crate::infrastructure::storage::{MemorySettingsStore, StorageError, TomlSettingsStore};

/// Where the settings store keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsLocation {
    /// The platform config directory (`settings.toml`).
    PlatformDefault,
    /// An explicit TOML file.
    File(PathBuf),
    /// In memory only; nothing survives the process.
    Ephemeral,
}

/// All runtime configuration for the host harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub settings: SettingsLocation,
    /// Directory containing `Bundle/`.  Empty means the working directory.
    pub bundle_root: PathBuf,
    pub dev_server_url: String,
}

impl Default for HarnessConfig {
    /// | Field          | Default                          |
    /// |----------------|----------------------------------|
    /// | settings       | platform config directory        |
    /// | bundle_root    | working directory                |
    /// | dev_server_url | `http://localhost:8081/status`   |
    fn default() -> Self {
        Self {
            settings: SettingsLocation::PlatformDefault,
            bundle_root: PathBuf::new(),
            dev_server_url: DEV_SERVER_STATUS_URL.to_string(),
        }
    }
}

impl HarnessConfig {
    /// Opens the settings store this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoPlatformConfigDir`] when the platform default
    /// is requested but the config directory cannot be determined.
    pub fn open_settings_store(&self) -> Result<Arc<dyn SettingsStore>, StorageError> {
        let store: Arc<dyn SettingsStore> = match &self.settings {
            SettingsLocation::PlatformDefault => Arc::new(TomlSettingsStore::open_default()?),
            SettingsLocation::File(path) => Arc::new(TomlSettingsStore::new(path)),
            SettingsLocation::Ephemeral => Arc::new(MemorySettingsStore::new()),
        };
        Ok(store)
    }
}
