//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_path;
mod config_warning;
mod embedding;
mod hash;
mod strategy;

pub use asset_path::AssetPath;
pub use config_warning::ConfigWarning;
pub use embedding::ManifestEmbedding;
pub use hash::ContentHash;
pub use strategy::{CacheStrategy, UnknownStrategy};
