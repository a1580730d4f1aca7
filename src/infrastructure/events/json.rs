//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        let json = match event {
            GenerateEvent::Started {
                output_root,
                pwa_enabled,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "generate",
                    "output_root": output_root.display().to_string(),
                    "pwa": pwa_enabled,
                })
            }

            GenerateEvent::DeclaredLoaded { count } => {
                serde_json::json!({
                    "event": "declared",
                    "command": "generate",
                    "count": count,
                })
            }

            GenerateEvent::ReferencesDetected { count } => {
                serde_json::json!({
                    "event": "references",
                    "command": "generate",
                    "count": count,
                })
            }

            GenerateEvent::Scanned { candidate_count } => {
                serde_json::json!({
                    "event": "scanned",
                    "command": "generate",
                    "candidates": candidate_count,
                })
            }

            GenerateEvent::Warning { message } => {
                serde_json::json!({
                    "event": "warning",
                    "command": "generate",
                    "message": message,
                })
            }

            GenerateEvent::Fingerprinted {
                asset_count,
                dropped_count,
            } => {
                serde_json::json!({
                    "event": "fingerprinted",
                    "command": "generate",
                    "assets": asset_count,
                    "dropped": dropped_count,
                })
            }

            GenerateEvent::FileEmitted { path, outcome } => {
                serde_json::json!({
                    "event": "item_written",
                    "command": "generate",
                    "path": path.display().to_string(),
                    "outcome": outcome.as_str(),
                })
            }

            GenerateEvent::Completed {
                manifest_entries,
                written_count,
                unchanged_count,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "generate",
                    "status": "success",
                    "entries": manifest_entries,
                    "written": written_count,
                    "unchanged": unchanged_count,
                })
            }
        };

        self.write_event(json);
    }
}
