//! pwa-gen - asset manifest and service worker generator
//!
//! Runs after a web application has been compiled: scans the output tree,
//! decides which files must be available offline and how they are cached,
//! fingerprints them, and emits a JSON manifest plus a service worker that
//! embeds it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::{BuildProperties, Config, ProjectId};
pub use domain::entities::{Asset, BuildContext, Manifest, ManifestEntry};
pub use domain::value_objects::{AssetPath, CacheStrategy, ContentHash, ManifestEmbedding};
pub use error::{PwaError, PwaResult};
