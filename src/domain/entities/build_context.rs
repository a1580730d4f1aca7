//! Build context - the per-invocation facts every stage reads

use std::path::{Path, PathBuf};

/// Immutable facts about the current build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    pwa_enabled: bool,
    build_timestamp: String,
    output_root: PathBuf,
    entry_document: String,
}

impl BuildContext {
    pub fn new(
        pwa_enabled: bool,
        build_timestamp: impl Into<String>,
        output_root: impl Into<PathBuf>,
        entry_document: impl Into<String>,
    ) -> Self {
        Self {
            pwa_enabled,
            build_timestamp: build_timestamp.into(),
            output_root: output_root.into(),
            entry_document: entry_document.into(),
        }
    }

    pub fn pwa_enabled(&self) -> bool {
        self.pwa_enabled
    }

    /// Empty when PWA mode is off and the properties carried no timestamp
    pub fn build_timestamp(&self) -> &str {
        &self.build_timestamp
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Entry document name relative to the output root, POSIX separators
    pub fn entry_document(&self) -> &str {
        &self.entry_document
    }

    /// Absolute path of the entry document
    pub fn entry_document_path(&self) -> PathBuf {
        self.output_root.join(&self.entry_document)
    }
}
