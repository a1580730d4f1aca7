//! Generate Module
//!
//! Orchestrates a generator run for pwa-gen.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`GenerateOptions`)
//! - `result` - Result types (`GenerateResult`, `EmittedFile`, `ManifestReport`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use pwa_gen::application::generate::{GenerateOptions, GenerateUseCase};
//! use pwa_gen::infrastructure::LocalFs;
//!
//! let use_case = GenerateUseCase::new(LocalFs::new());
//! let result = use_case.execute(&GenerateOptions::new("."))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::{EmittedFile, GenerateResult, ManifestReport};
pub use use_case::GenerateUseCase;
