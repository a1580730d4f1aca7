//! Content fingerprinting
//!
//! Reads each asset once and derives its SHA-256 digest, raw size and, for
//! strategy-bearing assets, the gzip-compressed size the service worker uses
//! to estimate download progress.
//!
//! Files are independent, so the work runs on the rayon pool; results are
//! re-sorted by path before they leave this module.

use std::io::{self, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use rayon::prelude::*;

use crate::domain::entities::Asset;
use crate::domain::services::ResolvedStrategies;
use crate::domain::value_objects::{AssetPath, ContentHash};

/// Result of fingerprinting a set of paths
#[derive(Debug, Clone, Default)]
pub struct FingerprintOutcome {
    /// Successfully fingerprinted assets, sorted by path
    pub assets: Vec<Asset>,
    /// Paths dropped because they could not be read
    pub dropped: Vec<AssetPath>,
    pub warnings: Vec<String>,
}

/// Fingerprint `paths` under `root`.
///
/// A failing file is logged and dropped; it never fails the batch.
pub fn fingerprint_assets(
    root: &Path,
    paths: &[AssetPath],
    strategies: &ResolvedStrategies,
    parallel: bool,
) -> FingerprintOutcome {
    let fingerprint = |path: &AssetPath| {
        let with_gzip = strategies.get(path).is_some();
        (path.clone(), fingerprint_file(root, path, with_gzip))
    };

    let results: Vec<(AssetPath, io::Result<Asset>)> = if parallel {
        paths.par_iter().map(fingerprint).collect()
    } else {
        paths.iter().map(fingerprint).collect()
    };

    let mut outcome = FingerprintOutcome::default();
    for (path, result) in results {
        match result {
            Ok(asset) => {
                if asset.size() == 0 {
                    let message = format!("asset {} is empty", path);
                    tracing::warn!("{}", message);
                    outcome.warnings.push(message);
                }
                outcome.assets.push(asset);
            }
            Err(err) => {
                let message = format!("failed to fingerprint {}: {}", path, err);
                tracing::warn!("{}", message);
                outcome.warnings.push(message);
                outcome.dropped.push(path);
            }
        }
    }

    outcome.assets.sort_by(|a, b| a.path().cmp(b.path()));
    outcome.dropped.sort();
    outcome
}

/// Fingerprint a single asset
pub fn fingerprint_file(root: &Path, path: &AssetPath, with_gzip: bool) -> io::Result<Asset> {
    let bytes = std::fs::read(root.join(path.relative()))?;
    let asset = Asset::new(path.clone(), ContentHash::from_bytes(&bytes), bytes.len() as u64);

    if !with_gzip {
        return Ok(asset);
    }
    Ok(asset.with_gzip_size(gzip_size(&bytes)?))
}

/// Size of `bytes` after gzip at the default level
pub fn gzip_size(bytes: &[u8]) -> io::Result<u64> {
    let mut encoder = GzEncoder::new(CountingWriter::default(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?.count)
}

/// Sink that only counts what is written to it
#[derive(Debug, Default)]
struct CountingWriter {
    count: u64,
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.count += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
