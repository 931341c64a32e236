//! Builds [`Metadata`] from a value type declaration.

use buildr_model::{AccessorDeclaration, TypeDeclaration};
use tracing::debug;

use crate::{
    jackson::JacksonSupport,
    metadata::{Metadata, Property, PropertyBuilder},
};

/// Analyze a value type into generation metadata.
///
/// Property names come from [`TypeDeclaration::property_names`]; the
/// manifest rejects types where two accessors derive the same name.
pub fn analyze(value_type: &TypeDeclaration) -> Metadata {
    let jackson = JacksonSupport::create(value_type);
    debug!(
        value_type = %value_type.name,
        jackson = jackson.is_some(),
        accessors = value_type.accessors.len(),
        "analyzing value type"
    );

    let properties = value_type
        .accessors
        .iter()
        .zip(value_type.property_names())
        .map(|(accessor, name)| property(accessor, name, jackson.as_ref()))
        .collect();

    Metadata {
        type_name: value_type.name.clone(),
        properties,
    }
}

fn property(
    accessor: &AccessorDeclaration,
    name: String,
    jackson: Option<&JacksonSupport>,
) -> Property {
    let mut builder = PropertyBuilder::new(name, &accessor.name, &accessor.return_type);
    if let Some(jackson) = jackson {
        jackson.add_jackson_annotations(&mut builder, accessor);
    }
    builder.build()
}
