//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands
//! - `SourceArgs` - Shared declaration-source selection

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// jslib-export - bridge and client generation for WebGL builds.
///
/// Discovers externally-callable methods from a declaration source and
/// writes the `.jslib` bridge module plus the typed Angular service into the
/// project's Plugins directory.
#[derive(Parser, Debug)]
#[command(name = "jslib-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a generation pass into `<DATA_DIR>/Plugins`.
    ///
    /// Both artifacts are rewritten on every run; a failed pass leaves the
    /// existing artifacts untouched.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # From a JSON manifest
    /// jslib-export export --manifest exports.json ./Assets
    ///
    /// # From Rust sources carrying marker attributes
    /// jslib-export export --source ./informer/src ./Assets
    ///
    /// # Custom artifact names
    /// jslib-export export --manifest exports.json ./Assets \
    ///     --jslib-name Bridge.jslib --client-name bridge.service.ts
    /// ```
    Export {
        /// Project data directory; artifacts land in its Plugins folder
        data_dir: PathBuf,

        #[command(flatten)]
        source: SourceArgs,

        /// Override the bridge artifact file name
        #[arg(long = "jslib-name")]
        jslib_name: Option<String>,

        /// Override the client artifact file name
        #[arg(long = "client-name")]
        client_name: Option<String>,
    },

    /// List the methods a generation pass would export.
    ///
    /// Prints one line per discovered method with its parameter, payload
    /// type, and game object.
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Declaration-source selection, shared by all subcommands.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// JSON manifest listing candidate declarations
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Directory of Rust sources carrying marker attributes
    #[arg(long)]
    pub source: Option<PathBuf>,
}
