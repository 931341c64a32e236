//! Declaration builders shared by the generator's unit tests.

use buildr_core::QualifiedName;
use buildr_model::{AnnotationOccurrence, TypeDeclaration};

use crate::jackson::JSON_DESERIALIZE;

/// A marker annotation for a dotted type name, e.g. `marker("com.example.Marker")`.
///
/// # Panics
///
/// Panics if `qualified_name` is not a valid qualified name.
pub fn marker(qualified_name: &str) -> AnnotationOccurrence {
    let name = qualified_name
        .parse::<QualifiedName>()
        .unwrap_or_else(|e| panic!("bad test annotation '{}': {}", qualified_name, e));
    AnnotationOccurrence::marker(name)
}

/// A value type carrying `@JsonDeserialize`, with no accessors yet.
///
/// # Panics
///
/// Panics if `qualified_name` is not a valid qualified name.
pub fn jackson_type(qualified_name: &str) -> TypeDeclaration {
    let name = qualified_name
        .parse::<QualifiedName>()
        .unwrap_or_else(|e| panic!("bad test type '{}': {}", qualified_name, e));
    TypeDeclaration::new(name).with_annotation(AnnotationOccurrence::marker(JSON_DESERIALIZE))
}
