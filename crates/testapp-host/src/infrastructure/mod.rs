//! Infrastructure layer for the host application.
//!
//! Contains OS-facing adapters: the settings file, the embedded bundle
//! directory, the dev-server HTTP probe, the runtime host, and the menu
//! command bridge.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `testapp_core`, but MUST NOT be imported by the `application` or domain
//! layers.
//!
//! # Sub-modules
//!
//! - **`config`** – [`HarnessConfig`](config::HarnessConfig): where settings
//!   are stored, where bundles are looked up, which URL is probed.
//!
//! - **`storage`** – [`SettingsStore`](crate::application::settings::SettingsStore)
//!   implementations: a TOML file in the platform config directory, and an
//!   in-memory map for tests and ephemeral runs.
//!
//! - **`bundle`** – Finds the embedded bundle under `Bundle/` by probing the
//!   candidate entry names in priority order.
//!
//! - **`dev_server`** – Single HTTP GET against the dev server's `/status`
//!   endpoint; every failure is reported as "not running".
//!
//! - **`runtime_host`** – A [`RuntimeHost`](crate::application::instance::RuntimeHost)
//!   that records what was applied.  Stands in for the runtime framework in
//!   the binary and in tests.
//!
//! - **`ui_bridge`** – Command handlers the developer menu calls, returning a
//!   uniform `{ success, data, error }` envelope.

pub mod bundle;
pub mod config;
pub mod dev_server;
pub mod runtime_host;
pub mod storage;
pub mod ui_bridge;
