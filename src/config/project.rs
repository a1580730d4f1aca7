//! Project identifier and output root resolution

use std::path::{Path, PathBuf};

use crate::error::{PwaError, PwaResult};

use super::properties::BuildProperties;

/// Property keys consulted when the identifier is not given on the command line
pub const ARTIFACT_ID_KEY: &str = "artifactId";
pub const VERSION_KEY: &str = "version";

/// Artifact id and version of the application module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId {
    pub artifact_id: String,
    pub version: String,
}

impl ProjectId {
    pub fn new(artifact_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Combine explicit values with those recorded in the build properties.
    ///
    /// Explicit values win. Returns `None` when either part stays unknown.
    pub fn resolve(
        artifact_id: Option<&str>,
        version: Option<&str>,
        properties: &BuildProperties,
    ) -> Option<Self> {
        let artifact_id = artifact_id.or_else(|| properties.get(ARTIFACT_ID_KEY))?;
        let version = version.or_else(|| properties.get(VERSION_KEY))?;
        Some(Self::new(artifact_id.trim(), version.trim()))
    }

    /// `<project>/target/<artifactId>-<version>/<artifactId with '-' as '_'>`
    pub fn output_root(&self, project_root: &Path) -> PwaResult<PathBuf> {
        if self.artifact_id.is_empty() || self.version.is_empty() {
            return Err(PwaError::UnresolvedOutputDir {
                reason: "artifact id and version must not be empty".to_string(),
            });
        }
        if [&self.artifact_id, &self.version]
            .iter()
            .any(|part| part.contains(['/', '\\']) || part.as_str() == "..")
        {
            return Err(PwaError::UnresolvedOutputDir {
                reason: format!(
                    "'{}-{}' is not a plain directory name",
                    self.artifact_id, self.version
                ),
            });
        }

        Ok(project_root
            .join("target")
            .join(format!("{}-{}", self.artifact_id, self.version))
            .join(self.artifact_id.replace('-', "_")))
    }
}
