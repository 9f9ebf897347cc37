//! JSON manifest declaration source.
//!
//! A manifest lists candidate declarations explicitly, which suits build
//! setups where the host program's metadata is exported as a side file
//! rather than scanned in place:
//!
//! ```json
//! {
//!   "methods": [
//!     { "name": "ShowMessage", "exposed": true },
//!     {
//!       "name": "SendTag",
//!       "parameters": ["value"],
//!       "exposed": true,
//!       "stringArray": true,
//!       "documentation": "Tag selection changed."
//!     }
//!   ]
//! }
//! ```

use crate::source::DeclarationSource;
use jslib_core::{Declaration, Error, Marker, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Manifest {
    methods: Vec<ManifestMethod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestMethod {
    name: String,
    #[serde(default)]
    parameters: Vec<String>,
    #[serde(default)]
    exposed: bool,
    #[serde(default)]
    game_object_name: Option<String>,
    #[serde(default)]
    string_array: bool,
    #[serde(default)]
    documentation: Option<String>,
}

impl ManifestMethod {
    fn into_declaration(self) -> Declaration {
        let mut declaration = Declaration::new(self.name);
        declaration.parameters = self.parameters;
        if self.exposed {
            declaration = declaration.with_marker(Marker::Exposed {
                game_object_name: self.game_object_name,
            });
        }
        if self.string_array {
            declaration = declaration.with_marker(Marker::StringArray);
        }
        if let Some(documentation) = self.documentation {
            declaration = declaration.with_documentation(documentation);
        }
        declaration
    }
}

/// Declaration source backed by a JSON manifest file.
///
/// # Examples
///
/// ```no_run
/// use jslib_discovery::{DeclarationSource, ManifestSource};
///
/// let source = ManifestSource::new("exports.json");
/// let declarations = source.declarations()?;
/// # Ok::<(), jslib_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    /// Creates a source reading the manifest at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The manifest file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses manifest text into declarations, in manifest order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Source`] when the text is not a valid manifest.
    ///
    /// # Examples
    ///
    /// ```
    /// use jslib_discovery::ManifestSource;
    ///
    /// let declarations = ManifestSource::parse(
    ///     r#"{ "methods": [{ "name": "ShowMessage", "exposed": true }] }"#,
    /// )
    /// .unwrap();
    /// assert!(declarations[0].is_exposed());
    /// ```
    pub fn parse(text: &str) -> Result<Vec<Declaration>> {
        let manifest: Manifest = serde_json::from_str(text).map_err(|e| Error::Source {
            message: "manifest is not valid JSON".to_string(),
            source: Some(Box::new(e)),
        })?;

        Ok(manifest
            .methods
            .into_iter()
            .map(ManifestMethod::into_declaration)
            .collect())
    }
}

impl DeclarationSource for ManifestSource {
    fn declarations(&self) -> Result<Vec<Declaration>> {
        let text = fs::read_to_string(&self.path).map_err(|e| Error::Source {
            message: format!("failed to read manifest {}", self.path.display()),
            source: Some(Box::new(e)),
        })?;

        let declarations = Self::parse(&text)?;
        tracing::debug!(
            manifest = %self.path.display(),
            methods = declarations.len(),
            "loaded declaration manifest"
        );
        Ok(declarations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_method() {
        let declarations =
            ManifestSource::parse(r#"{ "methods": [{ "name": "ShowMessage", "exposed": true }] }"#)
                .unwrap();

        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].name, "ShowMessage");
        assert!(declarations[0].parameters.is_empty());
        assert!(declarations[0].is_exposed());
        assert!(!declarations[0].has_string_array_marker());
    }

    #[test]
    fn test_parse_full_method() {
        let declarations = ManifestSource::parse(
            r#"{
                "methods": [{
                    "name": "SendTag",
                    "parameters": ["value"],
                    "exposed": true,
                    "gameObjectName": "SceneInformer",
                    "stringArray": true,
                    "documentation": "Tag selection changed."
                }]
            }"#,
        )
        .unwrap();

        let decl = &declarations[0];
        assert_eq!(decl.parameters, vec!["value".to_string()]);
        assert!(decl.has_string_array_marker());
        assert_eq!(decl.game_object_name(), Some("SceneInformer"));
        assert_eq!(decl.documentation.as_deref(), Some("Tag selection changed."));
    }

    #[test]
    fn test_parse_unexposed_method_gets_no_marker() {
        let declarations =
            ManifestSource::parse(r#"{ "methods": [{ "name": "Internal" }] }"#).unwrap();
        assert!(!declarations[0].is_exposed());
        assert_eq!(declarations[0].game_object_name(), None);
    }

    #[test]
    fn test_parse_preserves_manifest_order() {
        let declarations = ManifestSource::parse(
            r#"{ "methods": [
                { "name": "Zulu", "exposed": true },
                { "name": "Alpha", "exposed": true }
            ] }"#,
        )
        .unwrap();

        assert_eq!(declarations[0].name, "Zulu");
        assert_eq!(declarations[1].name, "Alpha");
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = ManifestSource::parse("{ not json").unwrap_err();
        assert!(err.is_source_error());
    }

    #[test]
    fn test_missing_file_is_a_source_error() {
        let source = ManifestSource::new("/nonexistent/exports.json");
        let err = source.declarations().unwrap_err();
        assert!(err.is_source_error());
    }

    #[test]
    fn test_reads_manifest_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports.json");
        std::fs::write(
            &path,
            r#"{ "methods": [{ "name": "ShowMessage", "exposed": true }] }"#,
        )
        .unwrap();

        let source = ManifestSource::new(&path);
        let declarations = source.declarations().unwrap();
        assert_eq!(declarations.len(), 1);
    }
}
