//! Declaration model consumed by the buildr generator.
//!
//! These types are a read-only view over the user's value type: the type
//! itself, its accessors, and the annotations written on each of them.
//!
//! ```text
//! buildr.toml → buildr-manifest (parsing) → buildr-model (declarations) → codegen
//! ```
//!
//! The model is deliberately narrow so that in-memory test doubles stay
//! trivial to construct.

mod annotation;
mod declaration;

pub use annotation::{AnnotationOccurrence, AnnotationParseError};
pub use declaration::{AccessorDeclaration, AnnotatedDeclaration, TypeDeclaration};
