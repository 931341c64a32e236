//! Core types for the buildr generator.
//!
//! This crate provides the identifiers and naming rules shared by every
//! other buildr crate.

mod naming;
mod qualified_name;
mod source_version;

pub use naming::{decapitalize, strip_accessor_prefix};
pub use qualified_name::{ParseQualifiedNameError, QualifiedName};
pub use source_version::{ParseSourceVersionError, SourceVersion};
