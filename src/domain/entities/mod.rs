//! Domain Entities
//!
//! Objects built fresh for every generator run.

mod asset;
mod build_context;
mod manifest;

pub use asset::Asset;
pub use build_context::BuildContext;
pub use manifest::{Manifest, ManifestEntry};
