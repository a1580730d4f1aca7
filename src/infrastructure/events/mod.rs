//! Event Sink Implementations
//!
//! Provides concrete implementations of GenerateEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - TracingEventSink: progress through the log subscriber

mod json;
mod tracing_sink;

pub use json::JsonEventSink;
pub use tracing_sink::TracingEventSink;
