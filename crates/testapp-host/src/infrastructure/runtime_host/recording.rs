//! Recording runtime host.
//!
//! Keeps the last value written through each [`RuntimeHost`] setter, counts
//! reloads, and logs every call in order so tests can assert on sequencing
//! (settings pushed, *then* reload).
//!
//! # Usage in tests
//!
//! ```ignore
//! let host = Arc::new(RecordingRuntimeHost::new());
//! let instance = ReactInstance::new(host.clone(), store, locator);
//!
//! instance.load_js_bundle_from(BundleSource::DevServer);
//!
//! assert_eq!(host.main_module_name().as_deref(), Some("index"));
//! assert_eq!(host.reload_count(), 1);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use testapp_core::RuntimeSettings;
use tracing::debug;

use crate::application::instance::RuntimeHost;

/// One call made on the host, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    MainModuleName(String),
    BundleFile(String),
    UseWebDebugger(bool),
    UseDirectDebugger(bool),
    UseFastRefresh(bool),
    UseLiveReload(bool),
    Reload,
}

#[derive(Debug, Default)]
struct HostState {
    main_module_name: Option<String>,
    bundle_file: Option<String>,
    use_web_debugger: bool,
    use_direct_debugger: bool,
    use_fast_refresh: bool,
    use_live_reload: bool,
    reloads: usize,
    calls: Vec<HostCall>,
}

/// A [`RuntimeHost`] that records instead of driving a real runtime.
#[derive(Debug, Default)]
pub struct RecordingRuntimeHost {
    state: Mutex<HostState>,
}

impl RecordingRuntimeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main module name, or `None` if it was never set.
    pub fn main_module_name(&self) -> Option<String> {
        self.state().main_module_name.clone()
    }

    /// Bundle file path, or `None` if it was never set.
    pub fn bundle_file(&self) -> Option<String> {
        self.state().bundle_file.clone()
    }

    /// The developer flags as last written.
    pub fn applied_settings(&self) -> RuntimeSettings {
        let state = self.state();
        RuntimeSettings {
            use_web_debugger: state.use_web_debugger,
            use_direct_debugger: state.use_direct_debugger,
            use_fast_refresh: state.use_fast_refresh,
            use_live_reload: state.use_live_reload,
        }
    }

    pub fn reload_count(&self) -> usize {
        self.state().reloads
    }

    /// Every call so far, oldest first.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state().calls.clone()
    }

    fn state(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: HostCall, apply: impl FnOnce(&mut HostState)) {
        debug!("runtime host: {call:?}");
        let mut state = self.state();
        apply(&mut state);
        state.calls.push(call);
    }
}

impl RuntimeHost for RecordingRuntimeHost {
    fn set_javascript_main_module_name(&self, name: &str) {
        self.record(HostCall::MainModuleName(name.to_string()), |s| {
            s.main_module_name = Some(name.to_string());
        });
    }

    fn set_javascript_bundle_file(&self, path: &str) {
        self.record(HostCall::BundleFile(path.to_string()), |s| {
            s.bundle_file = Some(path.to_string());
        });
    }

    fn set_use_web_debugger(&self, enabled: bool) {
        self.record(HostCall::UseWebDebugger(enabled), |s| s.use_web_debugger = enabled);
    }

    fn set_use_direct_debugger(&self, enabled: bool) {
        self.record(HostCall::UseDirectDebugger(enabled), |s| {
            s.use_direct_debugger = enabled;
        });
    }

    fn set_use_fast_refresh(&self, enabled: bool) {
        self.record(HostCall::UseFastRefresh(enabled), |s| s.use_fast_refresh = enabled);
    }

    fn set_use_live_reload(&self, enabled: bool) {
        self.record(HostCall::UseLiveReload(enabled), |s| s.use_live_reload = enabled);
    }

    fn reload_instance(&self) {
        self.record(HostCall::Reload, |s| s.reloads += 1);
    }
}
