//! Application layer use cases for the host.
//!
//! - **`settings`** – The [`SettingsStore`](settings::SettingsStore) port:
//!   boolean preferences looked up by key with a caller-supplied default.
//!   Implementations live in `infrastructure::storage`.
//!
//! - **`instance`** – [`ReactInstance`](instance::ReactInstance), the
//!   controller that owns the runtime handle.  Every preference setter
//!   persists and then reloads the runtime in one call.
//!
//! - **`startup`** – Picks the initial bundle source from the dev-server
//!   probe and loads it.

pub mod instance;
pub mod settings;
pub mod startup;
