//! Marker model for candidate declarations.
//!
//! Markers are purely declarative tags attached to method declarations; they
//! carry no generation behavior of their own. Discovery reads two of them:
//! the exposure marker selects a declaration for export, and the string-array
//! marker upgrades a single string parameter to a `|`-delimited array on the
//! receiving side.

use serde::{Deserialize, Serialize};

/// Game object the exposure marker points at when none is named explicitly.
pub const DEFAULT_GAME_OBJECT_NAME: &str = "AngularInformer";

/// A declarative tag on a candidate declaration.
///
/// # Examples
///
/// ```
/// use jslib_core::Marker;
///
/// let exposed = Marker::exposed();
/// assert!(exposed.is_exposure());
/// assert!(!exposed.is_string_array());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    /// Marks a declaration as externally callable.
    Exposed {
        /// Name of the game object the exposed method belongs to. `None`
        /// means the default informer object.
        game_object_name: Option<String>,
    },

    /// Marks a single string parameter as a `|`-delimited array.
    StringArray,
}

impl Marker {
    /// Creates an exposure marker for the default game object.
    #[inline]
    #[must_use]
    pub const fn exposed() -> Self {
        Self::Exposed {
            game_object_name: None,
        }
    }

    /// Creates an exposure marker naming an explicit game object.
    ///
    /// # Examples
    ///
    /// ```
    /// use jslib_core::Marker;
    ///
    /// let marker = Marker::exposed_on("SceneInformer");
    /// assert!(marker.is_exposure());
    /// ```
    #[inline]
    #[must_use]
    pub fn exposed_on(game_object_name: impl Into<String>) -> Self {
        Self::Exposed {
            game_object_name: Some(game_object_name.into()),
        }
    }

    /// Returns `true` if this is the exposure marker.
    #[must_use]
    pub const fn is_exposure(&self) -> bool {
        matches!(self, Self::Exposed { .. })
    }

    /// Returns `true` if this is the string-array marker.
    #[must_use]
    pub const fn is_string_array(&self) -> bool {
        matches!(self, Self::StringArray)
    }
}

/// A candidate method declaration, as read from a declaration source.
///
/// This is the raw input to discovery: name, parameter names, attached
/// markers, and optional documentation. Whether the declaration actually
/// becomes a [`MethodDescriptor`](crate::MethodDescriptor) is decided by the
/// discovery pass.
///
/// # Examples
///
/// ```
/// use jslib_core::{Declaration, Marker};
///
/// let decl = Declaration::new("SendTag")
///     .with_parameter("value")
///     .with_marker(Marker::exposed())
///     .with_marker(Marker::StringArray);
///
/// assert!(decl.is_exposed());
/// assert!(decl.has_string_array_marker());
/// assert_eq!(decl.parameters.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Method name as declared in the host program.
    pub name: String,
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// Markers attached to this declaration.
    pub markers: Vec<Marker>,
    /// Documentation attached to the declaration, if any.
    pub documentation: Option<String>,
}

impl Declaration {
    /// Creates a declaration with no parameters, markers, or documentation.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            markers: Vec::new(),
            documentation: None,
        }
    }

    /// Appends a parameter name.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(name.into());
        self
    }

    /// Attaches a marker.
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Attaches documentation text.
    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Returns `true` if the exposure marker is attached.
    #[must_use]
    pub fn is_exposed(&self) -> bool {
        self.markers.iter().any(Marker::is_exposure)
    }

    /// Returns `true` if the string-array marker is attached to this exact
    /// declaration.
    #[must_use]
    pub fn has_string_array_marker(&self) -> bool {
        self.markers.iter().any(Marker::is_string_array)
    }

    /// Returns the game object this declaration is exposed on.
    ///
    /// Resolves to [`DEFAULT_GAME_OBJECT_NAME`] when the exposure marker
    /// names no explicit object, and `None` when the declaration is not
    /// exposed at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use jslib_core::{Declaration, Marker, DEFAULT_GAME_OBJECT_NAME};
    ///
    /// let decl = Declaration::new("ShowMessage").with_marker(Marker::exposed());
    /// assert_eq!(decl.game_object_name(), Some(DEFAULT_GAME_OBJECT_NAME));
    ///
    /// let unexposed = Declaration::new("Helper");
    /// assert_eq!(unexposed.game_object_name(), None);
    /// ```
    #[must_use]
    pub fn game_object_name(&self) -> Option<&str> {
        self.markers.iter().find_map(|marker| match marker {
            Marker::Exposed { game_object_name } => Some(
                game_object_name
                    .as_deref()
                    .unwrap_or(DEFAULT_GAME_OBJECT_NAME),
            ),
            Marker::StringArray => None,
        })
    }
}
