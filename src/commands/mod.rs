//! Command handlers

pub mod generate;
pub mod manifest;

use anyhow::{Context, Result};

use pwa_gen::config::Config;
use pwa_gen::presentation::ProjectArgs;
use pwa_gen::GenerateOptions;

/// Options and config warnings for the shared project flags
fn load_options(project: &ProjectArgs) -> Result<(GenerateOptions, Vec<String>)> {
    let (config, warnings) = Config::load_layered(&project.project, project.config.as_deref())
        .context("failed to load configuration")?;

    let mut options = GenerateOptions::new(&project.project).with_config(config);
    if let Some(dir) = &project.output_dir {
        options = options.with_output_root(dir);
    }
    if let Some(artifact_id) = &project.artifact_id {
        options = options.with_artifact_id(artifact_id);
    }
    if let Some(version) = &project.artifact_version {
        options = options.with_version(version);
    }

    Ok((options, warnings.iter().map(ToString::to_string).collect()))
}
