//! Domain Layer
//!
//! Pure generator logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Asset, Manifest, BuildContext
//! - `value_objects/` - AssetPath, ContentHash, CacheStrategy
//! - `services/` - strategy resolution, reference extraction, manifest
//!   assembly, template rendering, inline embedding
//! - `ports/` - FileSystem and event sink interfaces

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
