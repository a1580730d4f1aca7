//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation and config home lookup
//! - `events/` - Event sinks (NDJSON, tracing)
//! - `scanner` - Output tree walk
//! - `fingerprint` - Hashing and gzip sizing
//! - `project_file` - Declared strategies from the XML descriptor

pub mod events;
pub mod fingerprint;
pub mod fs;
pub mod project_file;
pub mod scanner;

// Re-export for convenience
pub use events::{JsonEventSink, TracingEventSink};
pub use fingerprint::{fingerprint_assets, FingerprintOutcome};
pub use fs::LocalFs;
pub use project_file::{load_declarations, DEFAULT_PROJECT_FILE};
pub use scanner::{scan_output_tree, ScanOutcome, ScanRules};
