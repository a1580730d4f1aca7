//! Generate Result
//!
//! Result types for generate operations.

use std::path::PathBuf;

use crate::domain::entities::{BuildContext, Manifest};
use crate::domain::ports::WriteOutcome;

/// A file the run wrote, or would write in dry-run mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
    /// Unified diff against the current content (dry run only)
    pub diff: Option<String>,
}

/// Result of a generate operation
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Output root the run worked on
    pub output_root: PathBuf,
    /// PWA mode of the build
    pub pwa_enabled: bool,
    /// Every output the run produced, in emission order
    pub files: Vec<EmittedFile>,
    /// Manifest entry count (0 when PWA mode is off)
    pub manifest_entries: usize,
    /// Entries precached at install
    pub critical_count: usize,
    /// Entries precached after activation
    pub background_count: usize,
    /// Recoverable problems encountered on the way
    pub warnings: Vec<String>,
    /// Nothing was written
    pub dry_run: bool,
}

impl GenerateResult {
    pub fn new(output_root: impl Into<PathBuf>, pwa_enabled: bool) -> Self {
        Self {
            output_root: output_root.into(),
            pwa_enabled,
            files: Vec::new(),
            manifest_entries: 0,
            critical_count: 0,
            background_count: 0,
            warnings: Vec::new(),
            dry_run: false,
        }
    }

    /// Files whose content changed (or would change)
    pub fn written(&self) -> impl Iterator<Item = &EmittedFile> {
        self.files.iter().filter(|f| f.outcome.is_change())
    }

    /// Files that already had the generated content
    pub fn unchanged(&self) -> impl Iterator<Item = &EmittedFile> {
        self.files.iter().filter(|f| !f.outcome.is_change())
    }

    pub fn has_changes(&self) -> bool {
        self.written().next().is_some()
    }
}

/// A manifest computed without emitting anything
#[derive(Debug, Clone)]
pub struct ManifestReport {
    pub context: BuildContext,
    pub manifest: Manifest,
    pub warnings: Vec<String>,
}
