//! Generate Event Port
//!
//! Observable progress of a generator run, for logs and NDJSON streams.

use std::path::PathBuf;

use crate::domain::ports::WriteOutcome;

/// Event emitted while generating
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// Run started
    Started { output_root: PathBuf, pwa_enabled: bool },

    /// Declared strategies were read from the project file
    DeclaredLoaded { count: usize },

    /// References were extracted from the entry document
    ReferencesDetected { count: usize },

    /// The output tree was scanned
    Scanned { candidate_count: usize },

    /// An asset was dropped or a source degraded
    Warning { message: String },

    /// Fingerprinting finished
    Fingerprinted { asset_count: usize, dropped_count: usize },

    /// An output file was processed
    FileEmitted { path: PathBuf, outcome: WriteOutcome },

    /// Run completed
    Completed {
        manifest_entries: usize,
        written_count: usize,
        unchanged_count: usize,
    },
}

/// Trait for receiving generate events
pub trait GenerateEventSink: Send + Sync {
    /// Handle a generate event
    fn on_event(&self, event: GenerateEvent);

    /// Whether per-file events are wanted; summary-only sinks return false
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
