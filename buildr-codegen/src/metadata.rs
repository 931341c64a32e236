//! Generation metadata for a value type and its properties.

use buildr_core::QualifiedName;
use serde::Serialize;

use crate::excerpt::Excerpt;

/// Everything the renderer needs to know about one value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub type_name: QualifiedName,
    pub properties: Vec<Property>,
}

/// One property of a value type, backed by an accessor method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub getter_name: String,
    pub type_name: String,
    /// Annotations to put on the generated accessor, in order.
    pub accessor_annotations: Vec<Excerpt>,
}

/// Incrementally builds a [`Property`].
///
/// Accessor annotations can only be appended; nothing removes or reorders
/// them once added.
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    name: String,
    getter_name: String,
    type_name: String,
    accessor_annotations: Vec<Excerpt>,
}

impl PropertyBuilder {
    pub fn new(
        name: impl Into<String>,
        getter_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            getter_name: getter_name.into(),
            type_name: type_name.into(),
            accessor_annotations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_accessor_annotation(&mut self, excerpt: Excerpt) -> &mut Self {
        self.accessor_annotations.push(excerpt);
        self
    }

    pub fn accessor_annotations(&self) -> &[Excerpt] {
        &self.accessor_annotations
    }

    pub fn build(self) -> Property {
        Property {
            name: self.name,
            getter_name: self.getter_name,
            type_name: self.type_name,
            accessor_annotations: self.accessor_annotations,
        }
    }
}
