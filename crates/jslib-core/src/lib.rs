//! Core types, errors, and configuration for the jslib/client generator.
//!
//! This crate provides the foundational types shared by discovery and code
//! generation:
//! - The marker model (`Marker`, `Declaration`) describing candidate methods
//! - The intermediate representation (`MethodDescriptor`, `ReturnKind`)
//! - Error hierarchy with contextual information
//! - Export configuration

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod descriptor;
mod error;
mod marker;

pub use config::ExportConfig;
pub use descriptor::{MethodDescriptor, ReturnKind};
pub use error::{Error, Result};
pub use marker::{DEFAULT_GAME_OBJECT_NAME, Declaration, Marker};
