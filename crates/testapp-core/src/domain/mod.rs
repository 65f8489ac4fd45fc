//! Domain entities for the ReactTestApp host.
//!
//! Pure data and rules, no infrastructure dependencies.  Storage, the
//! filesystem, and the runtime framework are reached through ports declared
//! in the host crate's application layer; this module only describes *what*
//! is stored and pushed, never *how*.

/// Where the JavaScript bundle is loaded from, and the candidate entry names.
pub mod bundle;

/// Persisted developer preferences and the debugger exclusivity rule.
pub mod preference;

/// The configuration snapshot applied to the runtime on every reload.
pub mod runtime;
