//! Annotated declarations: the user's value type and its accessors.

use buildr_core::{QualifiedName, decapitalize, strip_accessor_prefix};
use serde::Serialize;

use crate::AnnotationOccurrence;

/// A declaration that carries annotations.
///
/// Implementors only need to expose their occurrences in declaration order;
/// lookups by annotation type are provided.
pub trait AnnotatedDeclaration {
    /// Annotations in the order they were declared.
    fn annotations(&self) -> &[AnnotationOccurrence];

    /// First occurrence of the given annotation type, if any.
    fn find_annotation(&self, annotation_type: &QualifiedName) -> Option<&AnnotationOccurrence> {
        self.annotations().iter().find(|a| a.is(annotation_type))
    }

    fn has_annotation(&self, annotation_type: &QualifiedName) -> bool {
        self.find_annotation(annotation_type).is_some()
    }
}

/// An abstract accessor method on the user's value type, e.g. `int getAge()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorDeclaration {
    pub name: String,
    pub return_type: String,
    pub annotations: Vec<AnnotationOccurrence>,
}

impl AccessorDeclaration {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationOccurrence) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_boolean(&self) -> bool {
        self.return_type == "boolean"
    }
}

impl AnnotatedDeclaration for AccessorDeclaration {
    fn annotations(&self) -> &[AnnotationOccurrence] {
        &self.annotations
    }
}

/// The user's value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDeclaration {
    pub name: QualifiedName,
    pub annotations: Vec<AnnotationOccurrence>,
    pub accessors: Vec<AccessorDeclaration>,
}

impl TypeDeclaration {
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            annotations: Vec::new(),
            accessors: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationOccurrence) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_accessor(mut self, accessor: AccessorDeclaration) -> Self {
        self.accessors.push(accessor);
        self
    }

    /// Property names derived from the accessors, in accessor order.
    ///
    /// The `get`/`is` prefix is dropped only when every accessor carries one;
    /// a type mixing `getName()` and `age()` keeps the accessor names.
    pub fn property_names(&self) -> Vec<String> {
        let prefixed = !self.accessors.is_empty()
            && self
                .accessors
                .iter()
                .all(|a| strip_accessor_prefix(&a.name, a.is_boolean()).is_some());
        self.accessors
            .iter()
            .map(|a| {
                prefixed
                    .then(|| strip_accessor_prefix(&a.name, a.is_boolean()))
                    .flatten()
                    .map(decapitalize)
                    .unwrap_or_else(|| a.name.clone())
            })
            .collect()
    }
}

impl AnnotatedDeclaration for TypeDeclaration {
    fn annotations(&self) -> &[AnnotationOccurrence] {
        &self.annotations
    }
}
