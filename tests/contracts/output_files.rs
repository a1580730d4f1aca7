//! CONTRACT: what the generator is allowed to write.
//!
//! Only the service worker, the manifest (file embedding) or the entry
//! document (inline embedding) inside the output root. `manifest` and
//! `--dry-run` write nothing at all.

use crate::common::*;
use crate::{assert_not_generated, assert_success};

fn snapshot_tree(env: &TestEnv) -> Vec<(String, String)> {
    list_all_files(env.project_root.path())
        .into_iter()
        .map(|path| {
            let content = std::fs::read_to_string(&path).unwrap_or_default();
            (path, content)
        })
        .collect()
}

fn app() -> TestEnv {
    TestEnv::builder()
        .with_output_file("index.html", INDEX_HTML)
        .with_output_file("css/app.css", "body{}")
        .with_output_file("app/app.nocache.js", "x")
        .build()
}

#[test]
fn contract_generate_touches_only_generated_files() {
    let env = app();
    let before = snapshot_tree(&env);

    assert_success!(env.run(&["generate"]));
    let after = snapshot_tree(&env);

    let generated = [
        env.output_path("pwa-asset.json").display().to_string(),
        env.output_path("pwa-service-worker.js").display().to_string(),
    ];
    let new_files: Vec<_> = after
        .iter()
        .filter(|(path, _)| !before.iter().any(|(p, _)| p == path))
        .map(|(path, _)| path.clone())
        .collect();
    assert_eq!(new_files.len(), 2, "unexpected files: {:?}", new_files);
    assert!(new_files.iter().all(|path| generated.contains(path)));

    for (path, content) in &before {
        let (_, now) = after.iter().find(|(p, _)| p == path).unwrap();
        assert_eq!(now, content, "{} was modified", path);
    }
}

#[test]
fn contract_manifest_command_writes_nothing() {
    let env = app();
    let before = snapshot_tree(&env);

    assert_success!(env.run(&["manifest"]));

    assert_eq!(snapshot_tree(&env), before);
}

#[test]
fn contract_dry_run_writes_nothing() {
    let env = app();
    let before = snapshot_tree(&env);

    let result = env.run(&["generate", "--dry-run", "--embedding", "inline"]);
    assert_success!(result);

    assert_eq!(snapshot_tree(&env), before);
    assert_not_generated!(env, "pwa-service-worker.js");
    assert!(result.stdout.contains("Dry Run"), "{}", result.stdout);
}

#[test]
fn contract_generated_files_are_not_manifest_entries() {
    let env = app();
    assert_success!(env.run(&["generate"]));
    assert_success!(env.run(&["generate"]));

    let manifest = env.read_manifest();
    assert!(manifest.get("/pwa-asset.json").is_none());
    assert!(manifest.get("/pwa-service-worker.js").is_none());
    assert!(manifest.get("/index.html").is_none());
}
