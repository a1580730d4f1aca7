//! pwa-gen CLI - asset manifest and service worker generator
//!
//! Usage: pwa-gen <COMMAND>
//!
//! Commands:
//!   generate  Write the service worker and the asset manifest
//!   manifest  Print the asset manifest without writing anything

mod commands;

use anyhow::Result;
use clap::Parser;

use pwa_gen::logging::init_logging;
use pwa_gen::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Generate {
            project,
            embedding,
            dry_run,
        } => commands::generate::cmd_generate(project, *embedding, *dry_run, cli.json, cli.verbose),
        Commands::Manifest { project } => commands::manifest::cmd_manifest(project, cli.json),
    }
}
