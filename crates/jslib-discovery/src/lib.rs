//! Declaration discovery for the jslib/client generator.
//!
//! Enumerates candidate method declarations from a pluggable source, filters
//! them to the externally-callable set, and builds the ordered
//! [`MethodDescriptor`](jslib_core::MethodDescriptor) list both emitters
//! consume.
//!
//! Three sources are provided:
//! - [`StaticDeclarations`] - an in-memory registry
//! - [`ManifestSource`] - a JSON manifest file
//! - [`SourceScanner`] - Rust sources carrying marker attributes

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod discover;
mod manifest;
mod scan;
mod source;

pub use discover::discover;
pub use manifest::ManifestSource;
pub use scan::SourceScanner;
pub use source::{DeclarationSource, StaticDeclarations};
