//! testapp-host library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does testapp-host do?
//!
//! The host is the native shell around an embedded JavaScript runtime.  It
//! does not run JavaScript itself; it decides *how* the runtime is configured
//! and tells it when to reload:
//!
//! 1. Reads and writes the developer preferences (break on first line,
//!    direct/web debugger, fast refresh) in a settings file that survives
//!    restarts.
//! 2. Pushes those preferences into the runtime and reloads it every time one
//!    of them changes.
//! 3. Points the runtime at either the dev server or an embedded bundle found
//!    under `Bundle/`.
//! 4. Checks whether the dev server is reachable, so the menu (and the
//!    startup path) can choose a sensible bundle source.

/// Application layer: the instance controller and the ports it drives.
pub mod application;

/// Infrastructure layer: storage, filesystem, HTTP, and UI bridge adapters.
pub mod infrastructure;
