//! Generated artifact containers.
//!
//! Emission produces artifacts fully in memory; writing to disk is a
//! separate step so that any discovery or rendering failure leaves the
//! output directory untouched.

use serde::{Deserialize, Serialize};

/// A single generated artifact: a file name and its full text content.
///
/// # Examples
///
/// ```
/// use jslib_codegen::GeneratedArtifact;
///
/// let artifact = GeneratedArtifact::new("BrowserInteractions.jslib", "mergeInto(...);");
/// assert_eq!(artifact.file_name, "BrowserInteractions.jslib");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// File name the artifact is written under, inside the output directory.
    pub file_name: String,
    /// Full artifact text.
    pub content: String,
}

impl GeneratedArtifact {
    /// Creates an artifact from a file name and content.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Ordered collection of the artifacts produced by one generation pass.
///
/// # Examples
///
/// ```
/// use jslib_codegen::{GeneratedArtifact, GeneratedArtifacts};
///
/// let mut artifacts = GeneratedArtifacts::new();
/// artifacts.add(GeneratedArtifact::new("a.jslib", ""));
/// assert_eq!(artifacts.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifacts {
    artifacts: Vec<GeneratedArtifact>,
}

impl GeneratedArtifacts {
    /// Creates an empty collection.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            artifacts: Vec::new(),
        }
    }

    /// Appends an artifact.
    pub fn add(&mut self, artifact: GeneratedArtifact) {
        self.artifacts.push(artifact);
    }

    /// Number of artifacts in the collection.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Returns `true` if the collection holds no artifacts.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Iterates the artifacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.iter()
    }

    /// Finds an artifact by file name.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.file_name == file_name)
    }
}

impl<'a> IntoIterator for &'a GeneratedArtifacts {
    type Item = &'a GeneratedArtifact;
    type IntoIter = std::slice::Iter<'a, GeneratedArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection() {
        let artifacts = GeneratedArtifacts::new();
        assert!(artifacts.is_empty());
        assert_eq!(artifacts.len(), 0);
    }

    #[test]
    fn test_add_and_get() {
        let mut artifacts = GeneratedArtifacts::new();
        artifacts.add(GeneratedArtifact::new("bridge.jslib", "content"));

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts.get("bridge.jslib").unwrap().content, "content");
        assert!(artifacts.get("missing.ts").is_none());
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut artifacts = GeneratedArtifacts::new();
        artifacts.add(GeneratedArtifact::new("b", ""));
        artifacts.add(GeneratedArtifact::new("a", ""));

        let names: Vec<_> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
