//! Property tests for manifest assembly and serialization.

use proptest::prelude::*;

use pwa_gen::domain::entities::{Asset, Manifest};
use pwa_gen::domain::services::{build_manifest, FilenameHeuristic, StrategyResolver};
use pwa_gen::domain::value_objects::{AssetPath, ContentHash};

fn asset_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._ -]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("/"))
}

fn assets() -> impl Strategy<Value = Vec<(String, Vec<u8>)>> {
    proptest::collection::vec(
        (asset_path(), proptest::collection::vec(any::<u8>(), 0..64)),
        0..24,
    )
}

fn to_assets(raw: &[(String, Vec<u8>)]) -> Vec<Asset> {
    raw.iter()
        .filter_map(|(path, content)| {
            let path = AssetPath::from_reference(path)?;
            Some(Asset::new(path, ContentHash::from_bytes(content), content.len() as u64))
        })
        .collect()
}

fn manifest_for(assets: &[Asset]) -> Manifest {
    let candidates: Vec<AssetPath> = assets.iter().map(|a| a.path().clone()).collect();
    let strategies = StrategyResolver::new()
        .with_source(FilenameHeuristic::default())
        .resolve(&candidates);
    build_manifest(assets, &strategies)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Serialized keys are in byte order, whatever the input order.
    #[test]
    fn property_manifest_keys_sorted(raw in assets()) {
        let manifest = manifest_for(&to_assets(&raw));
        let json = manifest.to_json();

        let positions: Vec<usize> = manifest
            .iter()
            .map(|(path, _)| json.find(&serde_json::to_string(path.as_str()).unwrap()).unwrap())
            .collect();
        let keys: Vec<&str> = manifest.iter().map(|(path, _)| path.as_str()).collect();

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(keys.windows(2).all(|w| w[0].as_bytes() < w[1].as_bytes()));
    }

    /// PROPERTY: The manifest does not depend on the order assets arrive in.
    #[test]
    fn property_manifest_deterministic(raw in assets()) {
        let forward = to_assets(&raw);
        let mut reversed = forward.clone();
        reversed.reverse();

        // Duplicate paths resolve to the last occurrence, so only compare unique inputs
        let mut paths: Vec<_> = forward.iter().map(|a| a.path().clone()).collect();
        paths.sort();
        paths.dedup();
        prop_assume!(paths.len() == forward.len());

        prop_assert_eq!(manifest_for(&forward).to_json(), manifest_for(&reversed).to_json());
    }

    /// PROPERTY: Serialization is always valid JSON, including odd file names.
    #[test]
    fn property_manifest_json_valid(
        names in proptest::collection::vec("[^/\\\\]{1,16}", 0..8)
    ) {
        let raw: Vec<(String, Vec<u8>)> =
            names.into_iter().map(|name| (name, b"content".to_vec())).collect();
        let manifest = manifest_for(&to_assets(&raw));

        let parsed: serde_json::Value = serde_json::from_str(&manifest.to_json()).unwrap();
        prop_assert_eq!(parsed.as_object().unwrap().len(), manifest.len());
    }

    /// PROPERTY: Changing one byte changes the hash.
    #[test]
    fn property_one_byte_change_changes_hash(
        content in proptest::collection::vec(any::<u8>(), 1..256),
        index in any::<prop::sample::Index>(),
        delta in 1u8..=255,
    ) {
        let mut changed = content.clone();
        let i = index.index(changed.len());
        changed[i] = changed[i].wrapping_add(delta);

        prop_assert_ne!(ContentHash::from_bytes(&content), ContentHash::from_bytes(&changed));
    }
}
