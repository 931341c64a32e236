//! `buildr.toml` parsing and validation.
//!
//! A manifest describes the value types to generate builders for: each
//! type's qualified name, its annotations, and its accessors. Parsing
//! validates everything up front, so a [`Manifest`] only ever holds
//! well-formed declarations.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use manifest::{DEFAULT_FILENAME, Manifest, parse_manifest};
