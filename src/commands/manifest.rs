use anyhow::{Context, Result};

use pwa_gen::presentation::{create_generate_use_case, ProjectArgs};

pub fn cmd_manifest(project: &ProjectArgs, json: bool) -> Result<()> {
    let (options, config_warnings) = super::load_options(project)?;

    let report = create_generate_use_case()
        .build_manifest(&options)
        .with_context(|| format!("cannot build manifest for {}", project.project.display()))?;
    let manifest_json = report.manifest.to_json();

    if json {
        let warnings: Vec<&String> = config_warnings.iter().chain(&report.warnings).collect();
        let output = serde_json::json!({
            "output_root": report.context.output_root().display().to_string(),
            "entries": report.manifest.len(),
            "manifest": serde_json::from_str::<serde_json::Value>(&manifest_json)?,
            "warnings": warnings,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", manifest_json);
    }
    Ok(())
}
