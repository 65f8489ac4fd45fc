//! SettingsStore: the persisted key-value area preferences live in.

use testapp_core::Preference;

/// A process-wide store of boolean values keyed by string.
///
/// Handed to the controller at construction rather than reached as global
/// state, so tests can substitute an in-memory store.
///
/// Neither method can fail from the caller's point of view: a missing or
/// non-boolean value reads as `default`, and write failures are an
/// implementation concern (logged, then dropped).  Last write wins.
pub trait SettingsStore: Send + Sync {
    /// Returns the value stored under `key`, or `default` when it is absent
    /// or not a boolean.
    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Stores `value` under `key`, replacing whatever was there.
    fn set_bool(&self, key: &str, value: bool);

    /// Reads `preference` with its documented default.
    fn get_preference(&self, preference: Preference) -> bool {
        self.get_bool(preference.key(), preference.default_value())
    }

    /// Writes `preference`.
    fn set_preference(&self, preference: Preference, value: bool) {
        self.set_bool(preference.key(), value);
    }
}
