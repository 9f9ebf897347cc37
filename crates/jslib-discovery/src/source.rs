//! The declaration-source capability interface.
//!
//! Discovery never inspects program metadata directly; it asks a
//! [`DeclarationSource`] for the candidate set. This keeps the pass
//! independent of where declarations come from - a static registry, a parsed
//! manifest, or scanned source files.

use jslib_core::{Declaration, Result};

/// Provides the candidate declaration set for one generation pass.
///
/// Implementations must return declarations in a stable order: the emitted
/// artifacts preserve discovery order, and re-running the pass over an
/// unchanged source must yield byte-identical output.
///
/// # Examples
///
/// ```
/// use jslib_core::{Declaration, Marker, Result};
/// use jslib_discovery::DeclarationSource;
///
/// struct Fixed;
///
/// impl DeclarationSource for Fixed {
///     fn declarations(&self) -> Result<Vec<Declaration>> {
///         Ok(vec![Declaration::new("ShowMessage").with_marker(Marker::exposed())])
///     }
/// }
///
/// let source = Fixed;
/// assert_eq!(source.declarations().unwrap().len(), 1);
/// ```
pub trait DeclarationSource {
    /// Returns the candidate declarations, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`jslib_core::Error::Source`] if the underlying source cannot
    /// be read or parsed.
    fn declarations(&self) -> Result<Vec<Declaration>>;
}

/// An in-memory declaration registry.
///
/// Useful for embedding the generator in other tools and for tests; the
/// declarations are handed back exactly as registered.
///
/// # Examples
///
/// ```
/// use jslib_core::{Declaration, Marker};
/// use jslib_discovery::{DeclarationSource, StaticDeclarations};
///
/// let source = StaticDeclarations::new(vec![
///     Declaration::new("ShowMessage").with_marker(Marker::exposed()),
///     Declaration::new("Helper"),
/// ]);
///
/// assert_eq!(source.declarations().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticDeclarations {
    declarations: Vec<Declaration>,
}

impl StaticDeclarations {
    /// Creates a registry over the given declarations.
    #[must_use]
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Appends a declaration to the registry.
    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Number of registered declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` if no declarations are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl DeclarationSource for StaticDeclarations {
    fn declarations(&self) -> Result<Vec<Declaration>> {
        Ok(self.declarations.clone())
    }
}
