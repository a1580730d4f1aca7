//! Generate Options
//!
//! Configuration types for generate operations.

use std::path::PathBuf;

use crate::config::Config;

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project directory; relative source and output paths resolve against it
    pub project_root: PathBuf,
    /// Explicit output root, bypassing the artifact id/version layout
    pub output_root: Option<PathBuf>,
    /// Artifact id override
    pub artifact_id: Option<String>,
    /// Version override
    pub version: Option<String>,
    /// Effective configuration (file, environment and CLI already merged)
    pub config: Config,
    /// Dry run (don't write files)
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            output_root: None,
            artifact_id: None,
            version: None,
            config: Config::default(),
            dry_run: false,
        }
    }

    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = Some(root.into());
        self
    }

    pub fn with_artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
