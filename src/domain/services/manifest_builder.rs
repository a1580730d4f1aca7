//! Manifest assembly
//!
//! Pure function of fingerprinted assets and resolved strategies.

use crate::domain::entities::{Asset, Manifest, ManifestEntry};
use crate::domain::services::ResolvedStrategies;

/// Build the manifest for `assets`.
///
/// Assets with a strategy become structured entries; a missing compressed
/// size is written as 0. Everything else is a bare hash. Input order does
/// not matter, the manifest sorts by path.
pub fn build_manifest(assets: &[Asset], strategies: &ResolvedStrategies) -> Manifest {
    let mut manifest = Manifest::new();
    for asset in assets {
        let entry = match strategies.get(asset.path()) {
            Some(strategy) => ManifestEntry::Managed {
                strategy,
                hash: asset.hash().clone(),
                size: asset.size(),
                gzip_size: asset.gzip_size().unwrap_or(0),
            },
            None => ManifestEntry::Hash(asset.hash().clone()),
        };
        manifest.insert(asset.path().clone(), entry);
    }
    manifest
}
