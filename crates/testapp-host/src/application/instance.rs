//! ReactInstance: owns the runtime handle and applies developer settings.
//!
//! Every preference setter is write-through: it persists the new value and
//! then reloads the runtime within the same call, so the persisted store and
//! the live runtime configuration never disagree once the call returns.  The
//! controller keeps no copy of the preferences; the [`SettingsStore`] is the
//! single source of truth and is re-read on every access.

use std::sync::Arc;

use testapp_core::{BundleSource, Preference, RuntimeSettings, DEV_SERVER_MAIN_MODULE};
use tracing::{debug, info, warn};

use super::settings::SettingsStore;

/// The settings object and reload entry point of the hosted runtime.
///
/// The real implementation forwards to the runtime framework; what those
/// calls do internally (teardown order, cancelling in-flight requests) is the
/// framework's business.  Methods take `&self` because the framework object
/// is a shared handle.
#[cfg_attr(test, mockall::automock)]
pub trait RuntimeHost: Send + Sync {
    fn set_javascript_main_module_name(&self, name: &str);
    fn set_javascript_bundle_file(&self, path: &str);
    fn set_use_web_debugger(&self, enabled: bool);
    fn set_use_direct_debugger(&self, enabled: bool);
    fn set_use_fast_refresh(&self, enabled: bool);
    fn set_use_live_reload(&self, enabled: bool);

    /// Reloads the runtime instance with the settings applied so far.
    fn reload_instance(&self);
}

/// Finds the embedded bundle to load.
pub trait BundleLocator: Send + Sync {
    /// Returns the base name of the highest-priority bundle entry that exists,
    /// or an empty string when there is none.
    fn bundle_name(&self) -> String;
}

/// Snapshot of all persisted developer preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevSettings {
    pub break_on_first_line: bool,
    pub use_direct_debugger: bool,
    pub use_fast_refresh: bool,
    pub use_web_debugger: bool,
}

/// The instance controller.
pub struct ReactInstance {
    host: Arc<dyn RuntimeHost>,
    settings: Arc<dyn SettingsStore>,
    bundles: Arc<dyn BundleLocator>,
}

impl ReactInstance {
    /// Creates a controller around `host`, held for the controller's lifetime.
    pub fn new(
        host: Arc<dyn RuntimeHost>,
        settings: Arc<dyn SettingsStore>,
        bundles: Arc<dyn BundleLocator>,
    ) -> Self {
        Self {
            host,
            settings,
            bundles,
        }
    }

    /// The runtime handle, for callers that embed the runtime's root view.
    pub fn runtime_host(&self) -> &Arc<dyn RuntimeHost> {
        &self.host
    }

    /// Points the runtime at `source` and reloads it.
    ///
    /// Loading from the dev server sets the main module name and clears the
    /// bundle file.  Loading the embedded bundle only sets the bundle file;
    /// the main module name keeps whatever value it had.
    pub fn load_js_bundle_from(&self, source: BundleSource) {
        match source {
            BundleSource::DevServer => {
                info!("loading bundle from dev server (module {DEV_SERVER_MAIN_MODULE:?})");
                self.host.set_javascript_main_module_name(DEV_SERVER_MAIN_MODULE);
                self.host.set_javascript_bundle_file("");
            }
            BundleSource::Embedded => {
                let name = self.bundles.bundle_name();
                if name.is_empty() {
                    warn!("no embedded bundle found; runtime will get an empty bundle path");
                } else {
                    info!("loading embedded bundle {name:?}");
                }
                self.host.set_javascript_bundle_file(&name);
            }
        }

        self.reload();
    }

    /// Pushes the current debugger and fast-refresh preferences into the
    /// runtime, then asks it to reload.
    pub fn reload(&self) {
        let applied = self.runtime_settings();

        self.host.set_use_web_debugger(applied.use_web_debugger);
        self.host.set_use_direct_debugger(applied.use_direct_debugger);
        self.host.set_use_fast_refresh(applied.use_fast_refresh);
        self.host.set_use_live_reload(applied.use_live_reload);

        info!(
            web_debugger = applied.use_web_debugger,
            direct_debugger = applied.use_direct_debugger,
            fast_refresh = applied.use_fast_refresh,
            "reloading runtime instance"
        );
        self.host.reload_instance();
    }

    /// Persists `value` for `preference` and reloads the runtime.
    ///
    /// Enabling one debugger mode first forces the other one off in the
    /// store, so the two are never on together.
    pub fn set_and_apply(&self, preference: Preference, value: bool) {
        if value {
            if let Some(other) = preference.conflicting() {
                debug!("{preference} enabled; forcing {other} off");
                self.settings.set_preference(other, false);
            }
        }
        debug!("storing {preference} = {value}");
        self.settings.set_preference(preference, value);
        self.reload();
    }

    /// Reads one preference from the store.
    pub fn preference(&self, preference: Preference) -> bool {
        self.settings.get_preference(preference)
    }

    /// Reads all preferences from the store.
    pub fn settings_snapshot(&self) -> DevSettings {
        DevSettings {
            break_on_first_line: self.break_on_first_line(),
            use_direct_debugger: self.use_direct_debugger(),
            use_fast_refresh: self.use_fast_refresh(),
            use_web_debugger: self.use_web_debugger(),
        }
    }

    pub fn break_on_first_line(&self) -> bool {
        self.preference(Preference::BreakOnFirstLine)
    }

    pub fn set_break_on_first_line(&self, value: bool) {
        self.set_and_apply(Preference::BreakOnFirstLine, value);
    }

    pub fn use_direct_debugger(&self) -> bool {
        self.preference(Preference::UseDirectDebugger)
    }

    pub fn set_use_direct_debugger(&self, value: bool) {
        self.set_and_apply(Preference::UseDirectDebugger, value);
    }

    pub fn use_fast_refresh(&self) -> bool {
        self.preference(Preference::UseFastRefresh)
    }

    pub fn set_use_fast_refresh(&self, value: bool) {
        self.set_and_apply(Preference::UseFastRefresh, value);
    }

    pub fn use_web_debugger(&self) -> bool {
        self.preference(Preference::UseWebDebugger)
    }

    pub fn set_use_web_debugger(&self, value: bool) {
        self.set_and_apply(Preference::UseWebDebugger, value);
    }

    fn runtime_settings(&self) -> RuntimeSettings {
        RuntimeSettings::new(
            self.use_web_debugger(),
            self.use_direct_debugger(),
            self.use_fast_refresh(),
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
