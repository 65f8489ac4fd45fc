//! # testapp-core
//!
//! Shared domain types for the ReactTestApp native host: the developer
//! preferences that are persisted between launches, the two places a
//! JavaScript bundle can come from, and the settings snapshot that is pushed
//! into the hosted runtime whenever it is reloaded.
//!
//! This crate has zero dependencies on OS APIs, network sockets, or the
//! runtime framework itself.  The `testapp-host` crate wires these types to
//! real storage, the filesystem, and HTTP.
//!
//! # Architecture overview
//!
//! - **`domain::preference`** – The four boolean developer preferences, their
//!   persisted key strings, their defaults, and the rule that the two
//!   debugger modes may never both be on.
//!
//! - **`domain::bundle`** – [`BundleSource`] (dev server vs. embedded file),
//!   the prioritized list of bundle entry names, and the fixed dev-server
//!   constants.
//!
//! - **`domain::runtime`** – [`RuntimeSettings`], the values the controller
//!   pushes into the runtime right before asking it to reload.

pub mod domain;

pub use domain::bundle::{
    bundle_path_for, BundleSource, BUNDLE_DIR, BUNDLE_ENTRY_CANDIDATES, BUNDLE_EXTENSION,
    DEV_SERVER_MAIN_MODULE, DEV_SERVER_STATUS_URL,
};
pub use domain::preference::{DebuggerMode, Preference, PreferenceError};
pub use domain::runtime::RuntimeSettings;
