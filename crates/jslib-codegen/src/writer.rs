//! Atomic artifact writing.
//!
//! Each artifact is written to a temporary file in the destination directory
//! and renamed over the final path. Readers of the plugins directory either
//! see the previous artifact or the complete new one, never a half-written
//! file.

use crate::artifact::GeneratedArtifacts;
use jslib_core::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes generated artifacts into a destination directory.
///
/// # Examples
///
/// ```
/// use jslib_codegen::{ArtifactWriter, GeneratedArtifact, GeneratedArtifacts};
///
/// # let dir = tempfile::tempdir().unwrap();
/// let mut artifacts = GeneratedArtifacts::new();
/// artifacts.add(GeneratedArtifact::new("bridge.jslib", "mergeInto(...);\n"));
///
/// let writer = ArtifactWriter::new(dir.path());
/// let written = writer.write(&artifacts).unwrap();
/// assert_eq!(written.len(), 1);
/// ```
#[derive(Debug)]
pub struct ArtifactWriter {
    directory: PathBuf,
}

impl ArtifactWriter {
    /// Creates a writer targeting `directory`.
    ///
    /// The directory must already exist; resolution and validation happen in
    /// [`plugins_dir`](crate::paths::plugins_dir).
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The destination directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Writes every artifact, replacing existing files atomically.
    ///
    /// Returns the final paths in artifact order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if creating, writing, or renaming a temporary
    /// file fails. Artifacts written before the failure remain in place;
    /// the failing artifact's final path is untouched.
    pub fn write(&self, artifacts: &GeneratedArtifacts) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let final_path = self.directory.join(&artifact.file_name);

            let mut temp = NamedTempFile::new_in(&self.directory).map_err(|e| Error::Io {
                path: final_path.clone(),
                source: e,
            })?;
            temp.write_all(artifact.content.as_bytes())
                .map_err(|e| Error::Io {
                    path: final_path.clone(),
                    source: e,
                })?;
            temp.persist(&final_path).map_err(|e| Error::Io {
                path: final_path.clone(),
                source: e.error,
            })?;

            tracing::info!(path = %final_path.display(), "wrote artifact");
            written.push(final_path);
        }
        Ok(written)
    }
}
