//! Persisted developer preferences.
//!
//! Each [`Preference`] is a named boolean flag.  Its identity is the key
//! string it is stored under; that string is part of the on-disk format and
//! must never change between releases, otherwise users silently lose their
//! settings on upgrade.
//!
//! | Variant             | Key                  | Default |
//! |---------------------|----------------------|---------|
//! | `BreakOnFirstLine`  | `breakOnFirstLine`   | `false` |
//! | `UseDirectDebugger` | `useDirectDebugger`  | `false` |
//! | `UseFastRefresh`    | `useFastRefresh`     | `true`  |
//! | `UseWebDebugger`    | `useWebDebugger`     | `false` |
//!
//! # Debugger exclusivity
//!
//! The runtime can attach a debugger either directly to the engine or through
//! a web (remote) debugger, never both.  The rule lives here as
//! [`Preference::conflicting`] so every writer enforces it the same way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for parsing preference names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    /// The given name matches neither a persisted key nor a CLI alias.
    #[error("unknown preference: {0:?}")]
    Unknown(String),
}

/// A persisted boolean developer preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preference {
    /// Pause the JavaScript engine on the first line of the bundle.
    BreakOnFirstLine,
    /// Attach a debugger directly to the JavaScript engine.
    UseDirectDebugger,
    /// Enable fast refresh (and live reload, which follows it).
    UseFastRefresh,
    /// Run the bundle inside a web debugger session.
    UseWebDebugger,
}

impl Preference {
    /// All preferences, in menu order.
    pub const ALL: [Preference; 4] = [
        Preference::BreakOnFirstLine,
        Preference::UseDirectDebugger,
        Preference::UseFastRefresh,
        Preference::UseWebDebugger,
    ];

    /// The key this preference is persisted under.
    pub const fn key(self) -> &'static str {
        match self {
            Preference::BreakOnFirstLine => "breakOnFirstLine",
            Preference::UseDirectDebugger => "useDirectDebugger",
            Preference::UseFastRefresh => "useFastRefresh",
            Preference::UseWebDebugger => "useWebDebugger",
        }
    }

    /// Value reported when nothing (or something that is not a boolean) is
    /// stored under [`key`](Self::key).
    pub const fn default_value(self) -> bool {
        matches!(self, Preference::UseFastRefresh)
    }

    /// The preference that must be forced off before this one is enabled.
    ///
    /// Only the two debugger modes conflict with each other.
    pub const fn conflicting(self) -> Option<Preference> {
        match self {
            Preference::UseDirectDebugger => Some(Preference::UseWebDebugger),
            Preference::UseWebDebugger => Some(Preference::UseDirectDebugger),
            Preference::BreakOnFirstLine | Preference::UseFastRefresh => None,
        }
    }

    /// Kebab-case alias used on the command line, e.g. `direct-debugger`.
    pub const fn cli_name(self) -> &'static str {
        match self {
            Preference::BreakOnFirstLine => "break-on-first-line",
            Preference::UseDirectDebugger => "direct-debugger",
            Preference::UseFastRefresh => "fast-refresh",
            Preference::UseWebDebugger => "web-debugger",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Preference {
    type Err = PreferenceError;

    /// Accepts either the persisted key (`useFastRefresh`) or the CLI alias
    /// (`fast-refresh`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preference::ALL
            .into_iter()
            .find(|p| p.key() == s || p.cli_name() == s)
            .ok_or_else(|| PreferenceError::Unknown(s.to_string()))
    }
}

/// The effective debugger attach mode derived from the two debugger flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebuggerMode {
    Off,
    Direct,
    Web,
}

impl DebuggerMode {
    /// Derives the mode from the persisted flags.
    ///
    /// Both flags set can only happen if the store was edited by hand; the
    /// direct debugger wins in that case, matching the order the runtime
    /// checks them in.
    pub fn from_flags(use_direct_debugger: bool, use_web_debugger: bool) -> Self {
        match (use_direct_debugger, use_web_debugger) {
            (true, _) => DebuggerMode::Direct,
            (false, true) => DebuggerMode::Web,
            (false, false) => DebuggerMode::Off,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
