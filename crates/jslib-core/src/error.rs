//! Error types for the jslib/client generator.
//!
//! All failures in a generation pass are deterministic functions of the
//! declaration set or the filesystem, so there is no retry machinery: the
//! caller fixes the input and re-runs.
//!
//! # Examples
//!
//! ```
//! use jslib_core::{Error, Result};
//!
//! fn check_arity(method: &str, count: usize) -> Result<()> {
//!     if count > 1 {
//!         return Err(Error::Arity {
//!             method: method.to_string(),
//!             count,
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_arity("SendTag", 3).unwrap_err();
//! assert!(err.is_arity_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the generator.
///
/// All errors in the generation pass use this type, providing consistent
/// error handling across the workspace crates.
#[derive(Error, Debug)]
pub enum Error {
    /// A candidate declaration has more than one parameter.
    ///
    /// Bridge entries forward at most a single string payload, so a method
    /// with two or more parameters cannot be exposed. This error aborts the
    /// entire pass before any file is written.
    #[error("method {method} is only allowed to have 1 argument (found {count})")]
    Arity {
        /// Name of the offending method declaration
        method: String,
        /// Number of parameters the declaration actually has
        count: usize,
    },

    /// A declaration source failed to produce candidate declarations.
    ///
    /// Raised for unreadable manifest files, malformed manifest JSON, or
    /// Rust sources that cannot be parsed.
    #[error("declaration source error: {message}")]
    Source {
        /// Description of the source failure
        message: String,
        /// Underlying cause, when one exists
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Template registration or rendering failed.
    ///
    /// Indicates a malformed template or a context that does not satisfy a
    /// template's placeholders (templates render in strict mode).
    #[error("template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
    },

    /// The output directory is missing, not a directory, or not writable.
    ///
    /// Artifacts are only ever written into an existing `Plugins` directory;
    /// the generator never creates it.
    #[error("output directory {} is unusable: {reason}", .path.display())]
    OutputDir {
        /// The directory that was rejected
        path: PathBuf,
        /// Why the directory cannot be used
        reason: String,
    },

    /// Writing an artifact failed.
    ///
    /// Covers temp-file creation, writing, and the final atomic rename.
    #[error("failed to write {}", .path.display())]
    Io {
        /// Path of the artifact that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is an arity violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use jslib_core::Error;
    ///
    /// let err = Error::Arity {
    ///     method: "SendTag".to_string(),
    ///     count: 2,
    /// };
    /// assert!(err.is_arity_error());
    /// ```
    #[must_use]
    pub const fn is_arity_error(&self) -> bool {
        matches!(self, Self::Arity { .. })
    }

    /// Returns `true` if this is a declaration-source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use jslib_core::Error;
    ///
    /// let err = Error::Source {
    ///     message: "manifest is not valid JSON".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_source_error());
    /// ```
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(self, Self::Source { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is an output-directory error.
    ///
    /// # Examples
    ///
    /// ```
    /// use jslib_core::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::OutputDir {
    ///     path: PathBuf::from("/missing/Plugins"),
    ///     reason: "directory does not exist".to_string(),
    /// };
    /// assert!(err.is_output_dir_error());
    /// ```
    #[must_use]
    pub const fn is_output_dir_error(&self) -> bool {
        matches!(self, Self::OutputDir { .. })
    }

    /// Returns `true` if this is a write failure.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type alias for generator operations.
///
/// # Examples
///
/// ```
/// use jslib_core::{Error, Result};
///
/// fn must_be_named(name: &str) -> Result<&str> {
///     if name.is_empty() {
///         return Err(Error::Source {
///             message: "declaration has no name".to_string(),
///             source: None,
///         });
///     }
///     Ok(name)
/// }
///
/// assert!(must_be_named("ShowMessage").is_ok());
/// assert!(must_be_named("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
