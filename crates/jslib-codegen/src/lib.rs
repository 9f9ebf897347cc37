//! Artifact emission for the jslib/client generator.
//!
//! Renders the discovered [`MethodDescriptor`](jslib_core::MethodDescriptor)
//! list into the two coupled artifacts using Handlebars templates:
//!
//! - the bridge module (`.jslib`) forwarding engine calls to global browser
//!   handlers
//! - the typed client service exposing those handlers as RxJS streams
//!
//! Both artifacts are rendered fully in memory and written with an atomic
//! temp-file-then-rename, so a failed pass never leaves partial output.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod artifact;
pub mod bridge;
pub mod client;
pub mod export;
pub mod naming;
pub mod paths;
pub mod template_engine;
pub mod writer;

pub use artifact::{GeneratedArtifact, GeneratedArtifacts};
pub use bridge::BridgeGenerator;
pub use client::ClientGenerator;
pub use export::Exporter;
pub use template_engine::TemplateEngine;
pub use writer::ArtifactWriter;
