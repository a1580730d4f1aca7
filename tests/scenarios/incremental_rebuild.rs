//! Scenario: the generator runs on every build.
//!
//! Journey:
//! 1. First build writes everything
//! 2. A rebuild with no changes leaves every output untouched
//! 3. Changing one asset changes exactly that asset's hash

use std::thread::sleep;
use std::time::Duration;

use crate::assert_success;
use crate::common::*;

fn app() -> TestEnv {
    TestEnv::builder()
        .with_output_file("index.html", INDEX_HTML)
        .with_output_file("css/app.css", "body{}")
        .with_output_file("app/app.nocache.js", "x")
        .with_output_file("images/icon.png", "icon")
        .build()
}

#[test]
fn scenario_rerun_without_changes_keeps_mtimes() {
    let env = app();
    assert_success!(env.run(&["generate"]));

    let worker_before = env.output_mtime("pwa-service-worker.js");
    let manifest_before = env.output_mtime("pwa-asset.json");

    // Coarse file system clocks would hide a rewrite otherwise
    sleep(Duration::from_millis(1100));
    let result = env.run(&["generate"]);
    assert_success!(result);

    assert_eq!(env.output_mtime("pwa-service-worker.js"), worker_before);
    assert_eq!(env.output_mtime("pwa-asset.json"), manifest_before);
    assert!(result.stdout.contains("Already Up-to-date"), "{}", result.stdout);
}

#[test]
fn scenario_inline_rerun_keeps_entry_document_stable() {
    let env = app();
    assert_success!(env.run(&["generate", "--embedding", "inline"]));
    let first = env.read_output_file("index.html");
    let mtime = env.output_mtime("index.html");

    sleep(Duration::from_millis(1100));
    assert_success!(env.run(&["generate", "--embedding", "inline"]));

    assert_eq!(env.read_output_file("index.html"), first);
    assert_eq!(env.output_mtime("index.html"), mtime);
}

#[test]
fn scenario_changed_asset_changes_only_its_hash() {
    let env = app();
    assert_success!(env.run(&["generate"]));
    let before = env.read_manifest();

    env.write_output_file("images/icon.png", "icon-v2");
    assert_success!(env.run(&["generate"]));
    let after = env.read_manifest();

    assert_ne!(before["/images/icon.png"], after["/images/icon.png"]);
    assert_eq!(before["/css/app.css"], after["/css/app.css"]);
    assert_eq!(before["/app/app.nocache.js"], after["/app/app.nocache.js"]);
}

#[test]
fn scenario_new_asset_appears_after_rebuild() {
    let env = app();
    assert_success!(env.run(&["generate"]));
    assert!(env.read_manifest().get("/images/new.png").is_none());

    env.write_output_file("images/new.png", "new");
    assert_success!(env.run(&["generate"]));

    assert!(env.read_manifest()["/images/new.png"].is_string());
}
