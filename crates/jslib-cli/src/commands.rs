//! Subcommand implementations.

use crate::cli::{Cli, Commands, SourceArgs};
use anyhow::{Context, Result, bail};
use jslib_codegen::Exporter;
use jslib_core::{DEFAULT_GAME_OBJECT_NAME, Declaration, ExportConfig};
use jslib_discovery::{DeclarationSource, ManifestSource, SourceScanner, StaticDeclarations, discover};
use std::path::Path;

/// Dispatches the parsed CLI to its subcommand.
///
/// # Errors
///
/// Returns the failing subcommand's error; `main` reports it and exits
/// non-zero.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Export {
            data_dir,
            source,
            jslib_name,
            client_name,
        } => export(&data_dir, &source, jslib_name, client_name),
        Commands::List { source } => list(&source),
    }
}

fn declaration_source(args: &SourceArgs) -> Result<Box<dyn DeclarationSource>> {
    match (&args.manifest, &args.source) {
        (Some(manifest), None) => Ok(Box::new(ManifestSource::new(manifest))),
        (None, Some(directory)) => Ok(Box::new(SourceScanner::new(directory))),
        // clap enforces exactly one of the two flags
        _ => bail!("either --manifest or --source is required"),
    }
}

fn export(
    data_dir: &Path,
    source_args: &SourceArgs,
    jslib_name: Option<String>,
    client_name: Option<String>,
) -> Result<()> {
    let source = declaration_source(source_args)?;

    let mut config = ExportConfig::default();
    if let Some(name) = jslib_name {
        config.jslib_file_name = name;
    }
    if let Some(name) = client_name {
        config.client_file_name = name;
    }

    let exporter = Exporter::with_config(config).context("failed to initialize the generator")?;
    let written = exporter
        .export(source.as_ref(), data_dir)
        .context("generation pass failed")?;

    for path in written {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn list(source_args: &SourceArgs) -> Result<()> {
    let source = declaration_source(source_args)?;
    let declarations = source
        .declarations()
        .context("failed to enumerate declarations")?;

    // Classify through the regular discovery pass so the listing matches
    // exactly what an export would emit.
    let descriptors = discover(&StaticDeclarations::new(declarations.clone()))
        .context("discovery failed")?;

    for descriptor in &descriptors {
        let game_object = declarations
            .iter()
            .find(|decl| decl.name == descriptor.method_name())
            .and_then(Declaration::game_object_name)
            .unwrap_or(DEFAULT_GAME_OBJECT_NAME);

        let signature = descriptor.parameter_name().map_or_else(
            || format!("{}()", descriptor.method_name()),
            |parameter| format!("{}({parameter})", descriptor.method_name()),
        );
        println!(
            "{signature} -> {}  [{game_object}]",
            descriptor.return_kind()
        );
    }

    tracing::info!(methods = descriptors.len(), "listed exportable methods");
    Ok(())
}
