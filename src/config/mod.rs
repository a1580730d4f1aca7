//! Configuration module for pwa-gen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PWA_GEN_*)
//! 3. Project config (pwa-gen.toml)
//! 4. User config (~/.config/pwa-gen/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Build inputs produced by the compile phase (build properties, project
//! identifier) are read here as well.

mod loader;
mod project;
mod properties;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use project::{ProjectId, ARTIFACT_ID_KEY, VERSION_KEY};
pub use properties::{BuildProperties, DEFAULT_PROPERTIES_FILE, PWA_KEY, TIMESTAMP_KEYS};
pub use types::{Config, OutputConfig, ScanConfig, SourcesConfig, StrategyConfig};
