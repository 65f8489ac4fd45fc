//! Command bridge for the developer menu.
//!
//! The in-app developer menu (and the CLI harness in `main.rs`) never touch
//! [`ReactInstance`] directly.  They call the commands below, which return a
//! serializable snapshot wrapped in a uniform envelope:
//!
//! ```json
//! { "success": true,  "data": {...}, "error": null  }
//! { "success": false, "data": null,  "error": "..."  }
//! ```
//!
//! Preference names arrive as strings from the menu, so they are parsed here
//! and an unknown name becomes an error envelope instead of a panic.

use serde::{Deserialize, Serialize};
use testapp_core::{BundleSource, DebuggerMode, Preference};
use tracing::info;

use crate::application::instance::{DevSettings, ReactInstance};
use crate::application::startup::DevServerProbe;

// ── DTOs ──────────────────────────────────────────────────────────────────────

/// Developer settings as shown in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevSettingsDto {
    pub break_on_first_line: bool,
    pub use_direct_debugger: bool,
    pub use_fast_refresh: bool,
    pub use_web_debugger: bool,
    /// `"Off"`, `"Direct"` or `"Web"`.
    pub debugger_mode: String,
}

impl From<DevSettings> for DevSettingsDto {
    fn from(s: DevSettings) -> Self {
        let mode = DebuggerMode::from_flags(s.use_direct_debugger, s.use_web_debugger);
        Self {
            break_on_first_line: s.break_on_first_line,
            use_direct_debugger: s.use_direct_debugger,
            use_fast_refresh: s.use_fast_refresh,
            use_web_debugger: s.use_web_debugger,
            debugger_mode: format!("{mode:?}"),
        }
    }
}

/// Unified response wrapper for menu commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    /// `true` if the command completed successfully; `false` on error.
    pub success: bool,
    /// The command's return value, present only when `success` is `true`.
    pub data: Option<T>,
    /// A human-readable error message, present only when `success` is `false`.
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    /// Constructs a successful result containing `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Constructs an error result containing the given message.
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Returns all developer settings.
pub fn get_dev_settings(instance: &ReactInstance) -> CommandResult<DevSettingsDto> {
    CommandResult::ok(instance.settings_snapshot().into())
}

/// Sets the preference called `name` (persisted key or CLI alias), reloads
/// the runtime, and returns the resulting settings.
pub fn set_preference(
    instance: &ReactInstance,
    name: &str,
    value: bool,
) -> CommandResult<DevSettingsDto> {
    match name.parse::<Preference>() {
        Ok(preference) => {
            instance.set_and_apply(preference, value);
            get_dev_settings(instance)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Flips the preference called `name` and returns the resulting settings.
pub fn toggle_preference(instance: &ReactInstance, name: &str) -> CommandResult<DevSettingsDto> {
    match name.parse::<Preference>() {
        Ok(preference) => {
            let value = !instance.preference(preference);
            info!("menu toggled {preference} to {value}");
            instance.set_and_apply(preference, value);
            get_dev_settings(instance)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Loads the bundle from `source` and reloads.
pub fn load_bundle(instance: &ReactInstance, source: BundleSource) -> CommandResult<BundleSource> {
    instance.load_js_bundle_from(source);
    CommandResult::ok(source)
}

/// Reloads the runtime with the current settings.
pub fn reload(instance: &ReactInstance) -> CommandResult<()> {
    instance.reload();
    CommandResult::ok(())
}

/// Reports whether the dev server is reachable.  Never an error envelope.
pub async fn check_dev_server(probe: &dyn DevServerProbe) -> CommandResult<bool> {
    CommandResult::ok(probe.is_running().await)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
