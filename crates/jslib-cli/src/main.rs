//! jslib-export CLI.
//!
//! Command-line front end for the generation pass: discovers
//! externally-callable methods from a manifest or scanned Rust sources and
//! writes the bridge (`.jslib`) and typed client artifacts into the
//! project's Plugins directory.
//!
//! # Examples
//!
//! ```bash
//! # Generate both artifacts
//! jslib-export export --manifest exports.json ./Assets
//!
//! # Inspect what would be exported
//! jslib-export list --source ./informer/src
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    commands::run(cli)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
