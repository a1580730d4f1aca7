//! Domain Services
//!
//! Stateless logic of the generator: classification, manifest assembly and
//! document rewriting. Nothing here touches the file system.

pub mod embedding;
mod manifest_builder;
mod reference_extractor;
mod service_worker;
mod strategy_resolver;

pub use embedding::{embed_manifest, strip_embedded_manifest, MANIFEST_SCRIPT_ID};
pub use manifest_builder::build_manifest;
pub use reference_extractor::{extract_references, is_absolute_url};
pub use service_worker::{ServiceWorkerTemplate, MANIFEST_PLACEHOLDER, TIMESTAMP_PLACEHOLDER};
pub use strategy_resolver::{
    AssetDeclaration, DeclaredStrategies, FilenameHeuristic, ReferencedAssets, Resolution,
    ResolvedStrategies, StrategyOrigin, StrategyResolver, StrategySource, StrategyTable,
};
