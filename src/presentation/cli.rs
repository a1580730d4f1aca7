//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose) are inherited by all subcommands
//! - `generate` and `manifest` share their input flags through [`ProjectArgs`]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::ManifestEmbedding;

/// CLI value for `--embedding`
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingArg {
    File,
    Inline,
}

impl From<EmbeddingArg> for ManifestEmbedding {
    fn from(arg: EmbeddingArg) -> Self {
        match arg {
            EmbeddingArg::File => ManifestEmbedding::File,
            EmbeddingArg::Inline => ManifestEmbedding::Inline,
        }
    }
}

/// pwa-gen - asset manifest and service worker generator for compiled web apps
#[derive(Parser, Debug)]
#[command(name = "pwa-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the build inputs and the output tree are
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project directory
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Artifact id of the application module
    #[arg(long)]
    pub artifact_id: Option<String>,

    /// Version of the application module
    #[arg(long = "version", value_name = "VERSION")]
    pub artifact_version: Option<String>,

    /// Output directory, bypassing the artifact id/version layout
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (default: <project>/pwa-gen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the service worker and the asset manifest
    Generate {
        #[command(flatten)]
        project: ProjectArgs,

        /// Where the manifest copy goes
        #[arg(long, value_enum)]
        embedding: Option<EmbeddingArg>,

        /// Dry run - show what would change
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the asset manifest without writing anything
    Manifest {
        #[command(flatten)]
        project: ProjectArgs,
    },
}
