//! Embedded bundle discovery.
//!
//! Looks for `Bundle/<name>.bundle` for each entry in
//! [`BUNDLE_ENTRY_CANDIDATES`], in order, and reports the first one that
//! exists.  Every call rescans the directory; nothing is cached, so a bundle
//! copied in while the app is running is picked up on the next load.

use std::path::{Path, PathBuf};

use testapp_core::{bundle_path_for, BUNDLE_ENTRY_CANDIDATES};
use tracing::debug;

use crate::application::instance::BundleLocator;

/// Returns the highest-priority bundle entry under the working directory, or
/// an empty string if there is none.
pub fn get_bundle_name() -> String {
    find_bundle_name_in(Path::new(""))
}

/// Same as [`get_bundle_name`], relative to `root` instead of the working
/// directory.
///
/// A candidate whose existence cannot be determined (permission error, broken
/// symlink) counts as missing and the scan moves on.
pub fn find_bundle_name_in(root: &Path) -> String {
    BUNDLE_ENTRY_CANDIDATES
        .iter()
        .find(|name| {
            let path = bundle_path_for(root, name);
            let exists = path.try_exists().unwrap_or(false);
            debug!("bundle candidate {} exists={exists}", path.display());
            exists
        })
        .map(|name| name.to_string())
        .unwrap_or_default()
}

/// [`BundleLocator`] that scans the filesystem under a fixed root.
#[derive(Debug, Clone, Default)]
pub struct FsBundleLocator {
    root: PathBuf,
}

impl FsBundleLocator {
    /// Scans `root/Bundle`.  An empty path means the working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BundleLocator for FsBundleLocator {
    fn bundle_name(&self) -> String {
        find_bundle_name_in(&self.root)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
