//! Tracing Event Sink
//!
//! Forwards generate events to the `tracing` subscriber, so a plain run
//! shows its progress at `-v`.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};

/// Event sink that logs each event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl GenerateEventSink for TracingEventSink {
    fn on_event(&self, event: GenerateEvent) {
        match event {
            GenerateEvent::Started {
                output_root,
                pwa_enabled,
            } => {
                tracing::info!(root = %output_root.display(), pwa = pwa_enabled, "generating");
            }
            GenerateEvent::DeclaredLoaded { count } => {
                tracing::debug!(count, "declared strategies loaded");
            }
            GenerateEvent::ReferencesDetected { count } => {
                tracing::debug!(count, "entry document references detected");
            }
            GenerateEvent::Scanned { candidate_count } => {
                tracing::debug!(candidates = candidate_count, "output tree scanned");
            }
            GenerateEvent::Warning { message } => {
                tracing::debug!(%message, "warning");
            }
            GenerateEvent::Fingerprinted {
                asset_count,
                dropped_count,
            } => {
                tracing::debug!(assets = asset_count, dropped = dropped_count, "fingerprinted");
            }
            GenerateEvent::FileEmitted { path, outcome } => {
                tracing::info!(path = %path.display(), outcome = outcome.as_str(), "emitted");
            }
            GenerateEvent::Completed {
                manifest_entries,
                written_count,
                unchanged_count,
            } => {
                tracing::info!(
                    entries = manifest_entries,
                    written = written_count,
                    unchanged = unchanged_count,
                    "done"
                );
            }
        }
    }
}
