//! Runtime settings snapshot.

use serde::{Deserialize, Serialize};

/// Developer flags pushed into the hosted runtime right before a reload.
///
/// Live reload is not a preference of its own: it always follows fast
/// refresh.  Construct through [`RuntimeSettings::new`] to keep it that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSettings {
    pub use_web_debugger: bool,
    pub use_direct_debugger: bool,
    pub use_fast_refresh: bool,
    pub use_live_reload: bool,
}

impl RuntimeSettings {
    pub fn new(use_web_debugger: bool, use_direct_debugger: bool, use_fast_refresh: bool) -> Self {
        Self {
            use_web_debugger,
            use_direct_debugger,
            use_fast_refresh,
            use_live_reload: use_fast_refresh,
        }
    }
}
