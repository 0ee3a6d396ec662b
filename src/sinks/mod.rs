//! Sink writer implementations

pub mod debug;
pub mod pretty;
pub mod raw;

pub use debug::DebugWriter;
pub use pretty::{Mode, PrettyWriter};
pub use raw::RawWriter;

// Re-export the destination trait alongside its implementations
pub use crate::core::RecordWriter;
