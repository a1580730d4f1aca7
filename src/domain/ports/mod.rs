//! Domain Ports
//!
//! Interfaces the application layer depends on; infrastructure provides the
//! implementations.

mod file_system;
mod generate_events;

pub use file_system::{FileSystem, FsError, FsResult, WriteOutcome};
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink};
