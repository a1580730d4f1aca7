//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `output` - Output rendering abstractions

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands, EmbeddingArg, ProjectArgs};
pub use output::{create_renderer, supports_unicode, GenerateResultRenderer, OutputFormat};

use crate::application::GenerateUseCase;
use crate::infrastructure::LocalFs;

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<LocalFs>;

/// Create a generate use case with all dependencies wired up
pub fn create_generate_use_case() -> ConcreteGenerateUseCase {
    GenerateUseCase::new(LocalFs::new())
}
