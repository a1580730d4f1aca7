//! Scenario: a team turns the PWA off for a release, then back on.
//!
//! Journey:
//! 1. PWA on: the manifest and precaching worker are written
//! 2. PWA off: only the self-unregistering worker is written
//! 3. The entry document is left alone while off

use crate::common::*;
use crate::{assert_generated, assert_not_generated, assert_success};

#[test]
fn scenario_pwa_off_writes_only_the_off_worker() {
    let env = TestEnv::builder()
        .with_pwa(false)
        .with_output_file("index.html", INDEX_HTML)
        .with_output_file("app/app.nocache.js", "x")
        .build();

    let result = env.run(&["generate", "--embedding", "inline"]);
    assert_success!(result);

    assert_generated!(env, "pwa-service-worker.js");
    assert_not_generated!(env, "pwa-asset.json");
    assert_eq!(env.read_output_file("index.html"), INDEX_HTML);

    let worker = env.read_output_file("pwa-service-worker.js");
    assert!(worker.contains("unregister"));
    assert!(!worker.contains("app.nocache.js"));
}

#[test]
fn scenario_turning_pwa_off_replaces_the_worker() {
    let env = TestEnv::builder()
        .with_output_file("index.html", INDEX_HTML)
        .with_output_file("app/app.nocache.js", "x")
        .build();

    assert_success!(env.run(&["generate"]));
    let on_worker = env.read_output_file("pwa-service-worker.js");
    assert!(on_worker.contains("/app/app.nocache.js"));

    env.write_properties(&default_properties(false));
    let result = env.run(&["generate"]);
    assert_success!(result);

    let off_worker = env.read_output_file("pwa-service-worker.js");
    assert_ne!(on_worker, off_worker);
    assert!(off_worker.contains("unregister"));
}

#[test]
fn scenario_upper_case_pwa_value_leaves_pwa_off() {
    let env = TestEnv::builder()
        .with_properties("pwa=TRUE\nbuildTimestamp=1\nartifactId=app\nversion=1.0\n")
        .with_output_file("a.js", "x")
        .build();

    assert_success!(env.run(&["generate"]));
    assert_not_generated!(env, "pwa-asset.json");
    assert!(env.read_output_file("pwa-service-worker.js").contains("unregister"));
}
