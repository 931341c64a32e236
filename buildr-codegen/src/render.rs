//! Renders the accessor members of a generated value class.

use crate::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    feature::{FeatureRegistry, SOURCE_LEVEL},
    metadata::{Metadata, Property},
};

/// Renders accessor overrides and `hashCode` for one value type.
///
/// Output is the member section of the value class body, at the indentation
/// of whatever [`CodeBuilder`] it is emitted into.
pub struct ValueTypeRenderer<'a> {
    metadata: &'a Metadata,
    features: &'a FeatureRegistry,
}

impl<'a> ValueTypeRenderer<'a> {
    pub fn new(metadata: &'a Metadata, features: &'a FeatureRegistry) -> Self {
        Self { metadata, features }
    }

    pub fn render(&self) -> String {
        let mut code = CodeBuilder::java();
        code.emit(self);
        code.build()
    }

    fn accessor(&self, property: &Property) -> CodeFragment {
        let annotations = property
            .accessor_annotations
            .iter()
            .flat_map(|excerpt| excerpt.to_fragments())
            .collect();
        CodeFragment::sequence(vec![
            CodeFragment::line("@Override"),
            CodeFragment::sequence(annotations),
            CodeFragment::block(
                format!(
                    "public {} {}() {{",
                    property.type_name, property.getter_name
                ),
                vec![CodeFragment::line(format!("return {};", property.name))],
                Some("}".to_string()),
            ),
        ])
    }

    fn hash_code(&self) -> CodeFragment {
        let fields = self
            .metadata
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let body = match self.features.get(&SOURCE_LEVEL).java_util_objects() {
            Some(objects) => format!("return {}.hash({});", objects, fields),
            None => format!("return java.util.Arrays.hashCode(new Object[] {{{}}});", fields),
        };
        CodeFragment::sequence(vec![
            CodeFragment::line("@Override"),
            CodeFragment::block(
                "public int hashCode() {",
                vec![CodeFragment::line(body)],
                Some("}".to_string()),
            ),
        ])
    }
}

impl Renderable for ValueTypeRenderer<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::javadoc(format!(
            "Accessors of {{@link {}}}.",
            self.metadata.type_name
        ))];
        for property in &self.metadata.properties {
            fragments.push(CodeFragment::blank());
            fragments.push(self.accessor(property));
        }
        fragments.push(CodeFragment::blank());
        fragments.push(self.hash_code());
        fragments
    }
}
