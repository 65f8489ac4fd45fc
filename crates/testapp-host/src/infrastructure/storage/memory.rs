//! In-memory settings store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::application::settings::SettingsStore;

/// A [`SettingsStore`] backed by a `HashMap`; values last until the process
/// exits.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<HashMap<String, bool>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys that have been written.
    pub fn len(&self) -> usize {
        self.values.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
            .unwrap_or(default)
    }

    fn set_bool(&self, key: &str, value: bool) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }
}
