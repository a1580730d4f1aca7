//! Manifest embedding mode
//!
//! Where the manifest lives next to the service worker, which always carries
//! its own copy through the `{{assetManifest}}` placeholder.

use serde::{Deserialize, Serialize};

/// Where the standalone copy of the manifest is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ManifestEmbedding {
    /// Written as a separate JSON file in the output root (default)
    #[default]
    File,
    /// Inlined into the entry document as a JSON script tag
    Inline,
}

impl ManifestEmbedding {
    /// Parse from a CLI or environment value
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Some(Self::File),
            "inline" => Some(Self::Inline),
            _ => None,
        }
    }
}
