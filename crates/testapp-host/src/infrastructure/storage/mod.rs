//! Storage infrastructure: where developer preferences are persisted.
//!
//! - `toml_file` keeps the preferences in a small TOML file in the
//!   platform-appropriate config directory, so they survive restarts.
//! - `memory` keeps them in a process-local map; nothing is written to disk.
//!
//! Both implement [`SettingsStore`](crate::application::settings::SettingsStore);
//! the controller never knows which one it was given.

pub mod memory;
pub mod toml_file;

pub use memory::MemorySettingsStore;
pub use toml_file::{settings_dir, settings_file_path, StorageError, TomlSettingsStore};
