//! Runtime host adapters.
//!
//! The JavaScript runtime framework is linked in by the embedding app; this
//! crate only ships the recording host, which stands in for it in the CLI
//! harness and in tests.

pub mod recording;

pub use recording::{HostCall, RecordingRuntimeHost};
