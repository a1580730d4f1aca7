//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - scan, classify, fingerprint and emit; also computes
//!   the manifest alone for the `manifest` command

pub mod generate;

pub use generate::{EmittedFile, GenerateOptions, GenerateResult, GenerateUseCase, ManifestReport};
