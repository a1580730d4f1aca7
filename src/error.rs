//! Error types for pwa-gen
//!
//! Library code returns [`PwaResult`]; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pwa-gen operations
pub type PwaResult<T> = Result<T, PwaError>;

/// Main error type for pwa-gen operations
#[derive(Error, Debug)]
pub enum PwaError {
    /// The build-properties file produced by the compile phase is missing
    #[error("build properties not found at {path}")]
    MissingBuildProperties { path: PathBuf },

    /// A property required in the current mode is absent
    #[error("missing required property '{key}' in {file}")]
    MissingProperty { key: String, file: PathBuf },

    /// Invalid TOML configuration
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Malformed XML project file
    #[error("invalid project file {file}: {message}")]
    InvalidProjectFile { file: PathBuf, message: String },

    /// The project identifier cannot be turned into an output directory
    #[error("cannot locate output directory: {reason}")]
    UnresolvedOutputDir { reason: String },

    /// An emitted file could not be written
    #[error("failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
