//! JavaScript bundle sources and entry-point naming.
//!
//! The host can run JavaScript from two places:
//!
//! - A **dev server** (Metro) on the developer's machine, which builds the
//!   bundle on demand.  The runtime only needs the entry module name; the
//!   bundle file path is cleared.
//! - An **embedded** bundle that was packaged with the app under `Bundle/`.
//!   The file name depends on how the project was built, so the host probes a
//!   fixed list of candidates in priority order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory, relative to the working directory, holding embedded bundles.
pub const BUNDLE_DIR: &str = "Bundle";

/// File extension of an embedded bundle.
pub const BUNDLE_EXTENSION: &str = "bundle";

/// Entry base names to look for under [`BUNDLE_DIR`], highest priority first.
///
/// Platform-specific entries beat `.native` ones, which beat the generic
/// `index`/`main` entries.
pub const BUNDLE_ENTRY_CANDIDATES: [&str; 6] = [
    "index.windows",
    "main.windows",
    "index.native",
    "main.native",
    "index",
    "main",
];

/// Main module name requested from the dev server.
pub const DEV_SERVER_MAIN_MODULE: &str = "index";

/// Endpoint the dev server answers on when it is up.
pub const DEV_SERVER_STATUS_URL: &str = "http://localhost:8081/status";

/// Where the runtime should load its JavaScript bundle from.
///
/// Not persisted: the caller picks it each time a bundle is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundleSource {
    DevServer,
    Embedded,
}

/// Path of the bundle file for entry `name` under `root`.
///
/// ```
/// use std::path::Path;
/// use testapp_core::bundle_path_for;
///
/// let path = bundle_path_for(Path::new("app"), "index.windows");
/// assert_eq!(path, Path::new("app/Bundle/index.windows.bundle"));
/// ```
pub fn bundle_path_for(root: &Path, name: &str) -> PathBuf {
    root.join(BUNDLE_DIR)
        .join(format!("{name}.{BUNDLE_EXTENSION}"))
}
