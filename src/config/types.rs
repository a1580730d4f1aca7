//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::FilenameHeuristic;
use crate::domain::value_objects::{ConfigWarning, ManifestEmbedding};
use crate::error::PwaResult;

use super::loader;

/// Names of the generated files and where the manifest goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_service_worker")]
    pub service_worker: String,

    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_entry_document")]
    pub entry_document: String,

    #[serde(default)]
    pub embedding: ManifestEmbedding,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            service_worker: default_service_worker(),
            manifest: default_manifest(),
            entry_document: default_entry_document(),
            embedding: ManifestEmbedding::default(),
        }
    }
}

fn default_service_worker() -> String {
    "pwa-service-worker.js".to_string()
}

fn default_manifest() -> String {
    "pwa-asset.json".to_string()
}

fn default_entry_document() -> String {
    "index.html".to_string()
}

/// Output tree scan settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Suffixes skipped in addition to `.map` and `.txt`
    #[serde(default)]
    pub exclude_extensions: Vec<String>,

    /// Fingerprint on the rayon thread pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_extensions: Vec::new(),
            parallel: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Filename heuristic settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
    #[serde(default = "default_critical_suffixes")]
    pub critical_suffixes: Vec<String>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            critical_suffixes: default_critical_suffixes(),
        }
    }
}

fn default_critical_suffixes() -> Vec<String> {
    FilenameHeuristic::DEFAULT_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Input file locations, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SourcesConfig {
    /// Build properties (default `target/classes/pwa-build.properties`)
    #[serde(default)]
    pub build_properties: Option<PathBuf>,

    /// XML project descriptor (default `webfx.xml`)
    #[serde(default)]
    pub project_file: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub strategy: StrategyConfig,

    #[serde(default)]
    pub sources: SourcesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PwaResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PwaResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, project config, user config, or defaults
    pub fn load_layered(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> PwaResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root, explicit)
    }

    /// Apply environment variable overrides (PWA_GEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Build properties location for a project
    pub fn build_properties_path(&self, project_root: &Path) -> PathBuf {
        match &self.sources.build_properties {
            Some(path) => project_root.join(path),
            None => project_root
                .join("target")
                .join("classes")
                .join(super::properties::DEFAULT_PROPERTIES_FILE),
        }
    }

    /// Project descriptor location for a project
    pub fn project_file_path(&self, project_root: &Path) -> PathBuf {
        match &self.sources.project_file {
            Some(path) => project_root.join(path),
            None => project_root.join(crate::infrastructure::DEFAULT_PROJECT_FILE),
        }
    }
}
