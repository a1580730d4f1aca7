//! CONTRACT: the persisted manifest layout.
//!
//! Hash-only entries are bare strings, managed entries carry strategy, hash,
//! size and gzip size, in that key order, one entry per line.

use regex::Regex;

use crate::assert_success;
use crate::common::*;

/// gzip output depends on the deflate backend; only its presence is part of the contract
fn redact_gzip(manifest: &str) -> String {
    Regex::new(r#""gzipSize": \d+"#)
        .unwrap()
        .replace_all(manifest, r#""gzipSize": [gzip]"#)
        .into_owned()
}

#[test]
fn contract_manifest_layout_is_stable() {
    let env = TestEnv::builder()
        .with_output_file("images/icon.png", "icon")
        .with_output_file("css/app.css", "body{}")
        .with_output_file("app/app.nocache.js", "x")
        .build();

    assert_success!(env.run(&["generate"]));

    let manifest = redact_gzip(&env.read_output_file("pwa-asset.json"));
    insta::assert_snapshot!(manifest, @r#"
    {
      "/app/app.nocache.js": {"strategy": "CRITICAL", "hash": "2d711642b726b04401627ca9fbac32f5c8530fb1903cc4db02258717921a4881", "size": 1, "gzipSize": [gzip]},
      "/css/app.css": "7c98040a541657584690ae2a1cc3b42a8b53b159cc60c5d3abbfecbaeac6c94a",
      "/images/icon.png": "c2d4b446a44ce54fab8e01150e24dd24f3d850c7c14dcfe31f6321341dd86874"
    }
    "#);
}

#[test]
fn contract_empty_output_tree_gives_empty_object() {
    let env = TestEnv::builder().build();

    assert_success!(env.run(&["generate"]));

    assert_eq!(env.read_output_file("pwa-asset.json"), "{}");
}

#[test]
fn contract_manifest_command_matches_written_manifest() {
    let env = TestEnv::builder()
        .with_output_file("index.html", INDEX_HTML)
        .with_output_file("css/app.css", "body{}")
        .with_output_file("app/app.nocache.js", "x")
        .build();

    let printed = env.run(&["manifest"]);
    assert_success!(printed);
    assert_success!(env.run(&["generate"]));

    assert_eq!(printed.stdout.trim_end(), env.read_output_file("pwa-asset.json"));
}

#[test]
fn contract_gzip_size_only_on_managed_entries() {
    let env = TestEnv::builder()
        .with_output_file("app/app.nocache.js", "window.app = {};\n")
        .with_output_file("images/photo.png", "photo")
        .build();

    assert_success!(env.run(&["generate"]));
    let manifest = env.read_manifest();

    let managed = &manifest["/app/app.nocache.js"];
    assert!(managed["gzipSize"].as_u64().unwrap() > 0);
    assert_eq!(managed["size"], 17);
    assert!(manifest["/images/photo.png"].is_string());
}
