//! Asset entity - one fingerprinted file of the output tree

use crate::domain::value_objects::{AssetPath, ContentHash};

/// A fingerprinted file from the build output
///
/// Identity is the path. Built once per run by the fingerprinter and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    path: AssetPath,
    hash: ContentHash,
    size: u64,
    gzip_size: Option<u64>,
}

impl Asset {
    pub fn new(path: AssetPath, hash: ContentHash, size: u64) -> Self {
        Self {
            path,
            hash,
            size,
            gzip_size: None,
        }
    }

    /// Attach the compressed size
    pub fn with_gzip_size(mut self, gzip_size: u64) -> Self {
        self.gzip_size = Some(gzip_size);
        self
    }

    pub fn path(&self) -> &AssetPath {
        &self.path
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn gzip_size(&self) -> Option<u64> {
        self.gzip_size
    }
}
