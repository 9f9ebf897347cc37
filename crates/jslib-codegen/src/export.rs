//! The one-shot export pass.
//!
//! Ties the pipeline together: discover descriptors, render both artifacts
//! in memory, then write them atomically into the plugins directory. The
//! pass is synchronous and all-or-nothing - any failure surfaces before the
//! output directory is touched.

use crate::artifact::{GeneratedArtifact, GeneratedArtifacts};
use crate::bridge::BridgeGenerator;
use crate::client::ClientGenerator;
use crate::paths::plugins_dir;
use crate::writer::ArtifactWriter;
use jslib_core::{ExportConfig, MethodDescriptor, Result};
use jslib_discovery::{DeclarationSource, discover};
use std::path::{Path, PathBuf};

/// Runs complete generation passes.
///
/// # Examples
///
/// ```
/// use jslib_codegen::Exporter;
/// use jslib_core::{Declaration, Marker};
/// use jslib_discovery::StaticDeclarations;
///
/// # let data = tempfile::tempdir().unwrap();
/// # std::fs::create_dir(data.path().join("Plugins")).unwrap();
/// let source = StaticDeclarations::new(vec![
///     Declaration::new("ShowMessage").with_marker(Marker::exposed()),
/// ]);
///
/// let exporter = Exporter::new().unwrap();
/// let written = exporter.export(&source, data.path()).unwrap();
/// assert_eq!(written.len(), 2);
/// ```
#[derive(Debug)]
pub struct Exporter<'a> {
    config: ExportConfig,
    bridge: BridgeGenerator<'a>,
    client: ClientGenerator<'a>,
}

impl Exporter<'_> {
    /// Creates an exporter with the default artifact file names.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Self::with_config(ExportConfig::default())
    }

    /// Creates an exporter with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn with_config(config: ExportConfig) -> Result<Self> {
        Ok(Self {
            config,
            bridge: BridgeGenerator::new()?,
            client: ClientGenerator::new()?,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Renders both artifacts in memory for an already-discovered list.
    ///
    /// The bridge artifact is first, the client artifact second.
    ///
    /// # Errors
    ///
    /// Returns error if either emitter fails to render.
    pub fn generate(&self, descriptors: &[MethodDescriptor]) -> Result<GeneratedArtifacts> {
        let mut artifacts = GeneratedArtifacts::new();
        artifacts.add(GeneratedArtifact::new(
            &self.config.jslib_file_name,
            self.bridge.generate(descriptors)?,
        ));
        artifacts.add(GeneratedArtifact::new(
            &self.config.client_file_name,
            self.client.generate(descriptors)?,
        ));
        Ok(artifacts)
    }

    /// Runs a full pass: discovery, emission, and atomic writes.
    ///
    /// Returns the paths of the written artifacts.
    ///
    /// # Errors
    ///
    /// Returns the discovery error (including arity violations), an
    /// output-directory error, or a write error. In every failure case the
    /// previously existing artifacts are left as they were.
    pub fn export(
        &self,
        source: &dyn DeclarationSource,
        data_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        tracing::info!(data_dir = %data_dir.display(), "starting generation pass");

        let descriptors = discover(source)?;
        let directory = plugins_dir(data_dir)?;
        let artifacts = self.generate(&descriptors)?;

        let written = ArtifactWriter::new(directory).write(&artifacts)?;
        tracing::info!(
            methods = descriptors.len(),
            artifacts = written.len(),
            "generation pass complete"
        );
        Ok(written)
    }
}
