//! Intermediate representation produced by discovery.
//!
//! One [`MethodDescriptor`] is built per exposed declaration. The descriptor
//! list is constructed once per generation pass, held in memory, fed to both
//! emitters, and discarded when the pass ends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way classification of what a bridge method delivers to the client.
///
/// The classification is derived entirely from the declaration shape: no
/// parameter means `Void`, one parameter means `String`, and the string-array
/// marker upgrades that to `StringArray`. There is no fourth state; the
/// mappings below are total.
///
/// # Examples
///
/// ```
/// use jslib_core::ReturnKind;
///
/// assert_eq!(ReturnKind::Void.typescript_type(), "void");
/// assert_eq!(ReturnKind::String.default_value(), "null");
/// assert_eq!(ReturnKind::StringArray.typescript_type(), "string[]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnKind {
    /// No payload; the bridge call is a bare notification.
    Void,
    /// A single string payload, pushed through unmodified.
    String,
    /// A single string payload, split on `|` by the client listener.
    StringArray,
}

impl ReturnKind {
    /// TypeScript type the client stream is parameterized with.
    #[must_use]
    pub const fn typescript_type(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::String => "string",
            Self::StringArray => "string[]",
        }
    }

    /// Literal seeded into the initial-value position of the client stream.
    ///
    /// `Void` streams take no seed, so the literal is empty.
    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Void => "",
            Self::String => "null",
            Self::StringArray => "[]",
        }
    }

    /// Returns `true` for the payload-less classification.
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }
}

impl fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.typescript_type())
    }
}

/// One discovered method, ready for emission.
///
/// The constructors enforce the shape invariant: a parameter name is present
/// exactly when the return kind is not [`ReturnKind::Void`].
///
/// # Examples
///
/// ```
/// use jslib_core::{MethodDescriptor, ReturnKind};
///
/// let descriptor = MethodDescriptor::string_array("SendTag", "value");
/// assert_eq!(descriptor.method_name(), "SendTag");
/// assert_eq!(descriptor.parameter_name(), Some("value"));
/// assert_eq!(descriptor.return_kind(), ReturnKind::StringArray);
/// assert_eq!(descriptor.default_value(), "[]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    method_name: String,
    parameter_name: Option<String>,
    return_kind: ReturnKind,
    documentation: Option<String>,
}

impl MethodDescriptor {
    /// Creates a descriptor for a parameterless method.
    #[must_use]
    pub fn void(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            parameter_name: None,
            return_kind: ReturnKind::Void,
            documentation: None,
        }
    }

    /// Creates a descriptor for a method with one plain string parameter.
    #[must_use]
    pub fn string(method_name: impl Into<String>, parameter_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            parameter_name: Some(parameter_name.into()),
            return_kind: ReturnKind::String,
            documentation: None,
        }
    }

    /// Creates a descriptor for a method whose string parameter is a
    /// `|`-delimited array.
    #[must_use]
    pub fn string_array(
        method_name: impl Into<String>,
        parameter_name: impl Into<String>,
    ) -> Self {
        Self {
            method_name: method_name.into(),
            parameter_name: Some(parameter_name.into()),
            return_kind: ReturnKind::StringArray,
            documentation: None,
        }
    }

    /// Attaches documentation carried over from the declaration.
    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Method name as declared in the host program.
    #[inline]
    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Parameter name, present exactly when the return kind is not `Void`.
    #[inline]
    #[must_use]
    pub fn parameter_name(&self) -> Option<&str> {
        self.parameter_name.as_deref()
    }

    /// The three-way payload classification.
    #[inline]
    #[must_use]
    pub const fn return_kind(&self) -> ReturnKind {
        self.return_kind
    }

    /// Documentation carried over from the declaration, if any.
    #[inline]
    #[must_use]
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// Literal seeded into the client stream's initial-value position.
    #[inline]
    #[must_use]
    pub const fn default_value(&self) -> &'static str {
        self.return_kind.default_value()
    }

    /// Returns `true` if the bridge entry carries a payload argument.
    #[inline]
    #[must_use]
    pub const fn has_parameter(&self) -> bool {
        self.parameter_name.is_some()
    }
}
