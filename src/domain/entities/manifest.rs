//! Asset manifest entity
//!
//! The persisted contract between the generator and the service worker:
//!
//! ```json
//! {
//!   "/app.css": "<sha256>",
//!   "/app/app.nocache.js": {"strategy": "CRITICAL", "hash": "<sha256>", "size": 812, "gzipSize": 455}
//! }
//! ```
//!
//! Keys are sorted by byte order. The textual layout is fixed so unchanged
//! inputs always serialize to the same bytes.

use std::collections::BTreeMap;

use crate::domain::value_objects::{AssetPath, CacheStrategy, ContentHash};

/// One manifest value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestEntry {
    /// Content-addressed only, cached on demand
    Hash(ContentHash),
    /// Actively managed by the precache logic
    Managed {
        strategy: CacheStrategy,
        hash: ContentHash,
        size: u64,
        gzip_size: u64,
    },
}

impl ManifestEntry {
    pub fn hash(&self) -> &ContentHash {
        match self {
            ManifestEntry::Hash(hash) => hash,
            ManifestEntry::Managed { hash, .. } => hash,
        }
    }

    pub fn strategy(&self) -> Option<CacheStrategy> {
        match self {
            ManifestEntry::Hash(_) => None,
            ManifestEntry::Managed { strategy, .. } => Some(*strategy),
        }
    }
}

/// Ordered path → entry mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<AssetPath, ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `path`
    pub fn insert(&mut self, path: AssetPath, entry: ManifestEntry) {
        self.entries.insert(path, entry);
    }

    pub fn get(&self, path: &str) -> Option<&ManifestEntry> {
        AssetPath::from_reference(path).and_then(|key| self.entries.get(&key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&AssetPath, &ManifestEntry)> {
        self.entries.iter()
    }

    /// Number of entries carrying the given strategy
    pub fn count_with(&self, strategy: CacheStrategy) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.strategy() == Some(strategy))
            .count()
    }

    /// Serialize to the manifest JSON layout
    pub fn to_json(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }

        let body = self
            .entries
            .iter()
            .map(|(path, entry)| {
                format!("\n  {}: {}", json_string(path.as_str()), entry_json(entry))
            })
            .collect::<Vec<_>>()
            .join(",");

        format!("{{{}\n}}", body)
    }
}

fn entry_json(entry: &ManifestEntry) -> String {
    match entry {
        ManifestEntry::Hash(hash) => json_string(hash.as_str()),
        ManifestEntry::Managed {
            strategy,
            hash,
            size,
            gzip_size,
        } => format!(
            "{{\"strategy\": {}, \"hash\": {}, \"size\": {}, \"gzipSize\": {}}}",
            json_string(strategy.as_str()),
            json_string(hash.as_str()),
            size,
            gzip_size
        ),
    }
}

/// JSON string literal with control characters, quotes and backslashes escaped
fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
