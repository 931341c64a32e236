//! Jackson annotation policy for generated accessors.
//!
//! Jackson names properties by heuristics on the accessor name, which do not
//! always agree with the property name the builder uses. When the value type
//! opts into Jackson with `@JsonDeserialize`, every generated accessor gets an
//! explicit `@JsonProperty`, unless the user already wrote one (copied as
//! is) or marked the accessor with an annotation that makes a property name
//! meaningless (nothing is added).

use buildr_core::QualifiedName;
use buildr_model::AnnotatedDeclaration;
use tracing::debug;

use crate::{excerpt::Excerpt, metadata::PropertyBuilder};

/// Type-level trigger for Jackson support.
pub const JSON_DESERIALIZE: QualifiedName =
    QualifiedName::from_static("com.fasterxml.jackson.databind.annotation", "JsonDeserialize");

pub const JSON_PROPERTY: QualifiedName =
    QualifiedName::from_static("com.fasterxml.jackson.annotation", "JsonProperty");

/// Annotations which disable automatic generation of `@JsonProperty`.
pub const DISABLE_PROPERTY_ANNOTATIONS: [QualifiedName; 4] = [
    QualifiedName::from_static("com.fasterxml.jackson.annotation", "JsonAnyGetter"),
    QualifiedName::from_static("com.fasterxml.jackson.annotation", "JsonIgnore"),
    QualifiedName::from_static("com.fasterxml.jackson.annotation", "JsonUnwrapped"),
    QualifiedName::from_static("com.fasterxml.jackson.annotation", "JsonValue"),
];

/// What [`JacksonSupport::add_jackson_annotations`] did for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JacksonOutcome {
    /// The user's own `@JsonProperty` was copied.
    Copied,
    /// A suppressing annotation was present; nothing was added.
    Suppressed,
    /// A default `@JsonProperty("<name>")` was added.
    Synthesized,
}

/// Adds Jackson annotations to the accessors of a value type.
///
/// Only exists for value types annotated with `@JsonDeserialize`; see
/// [`JacksonSupport::create`].
#[derive(Debug)]
pub struct JacksonSupport {
    _private: (),
}

impl JacksonSupport {
    /// Enable Jackson support if `value_type` carries `@JsonDeserialize`.
    pub fn create(value_type: &(impl AnnotatedDeclaration + ?Sized)) -> Option<Self> {
        value_type
            .has_annotation(&JSON_DESERIALIZE)
            .then_some(Self { _private: () })
    }

    /// Decide which `@JsonProperty`, if any, the accessor for `property`
    /// gets, and append it.
    ///
    /// At most one excerpt is appended per call.
    pub fn add_jackson_annotations(
        &self,
        property: &mut PropertyBuilder,
        getter: &(impl AnnotatedDeclaration + ?Sized),
    ) -> JacksonOutcome {
        let outcome = if let Some(annotation) = getter.find_annotation(&JSON_PROPERTY) {
            property.add_accessor_annotation(Excerpt::annotation(annotation));
            JacksonOutcome::Copied
        } else if generate_default_annotations(getter) {
            let excerpt = Excerpt::json_property(property.name());
            property.add_accessor_annotation(excerpt);
            JacksonOutcome::Synthesized
        } else {
            JacksonOutcome::Suppressed
        };
        debug!(property = property.name(), ?outcome, "jackson annotations");
        outcome
    }
}

fn generate_default_annotations(getter: &(impl AnnotatedDeclaration + ?Sized)) -> bool {
    !getter
        .annotations()
        .iter()
        .any(|a| DISABLE_PROPERTY_ANNOTATIONS.contains(a.annotation_type()))
}

#[cfg(test)]
mod tests {
    use buildr_model::{AccessorDeclaration, AnnotationOccurrence, TypeDeclaration};

    use super::*;
    use crate::testing::{jackson_type, marker};

    fn jackson() -> JacksonSupport {
        JacksonSupport::create(&jackson_type("com.example.Person")).expect("trigger present")
    }

    fn decide(accessor: &AccessorDeclaration) -> (JacksonOutcome, Vec<String>) {
        let mut builder = PropertyBuilder::new("age", &accessor.name, &accessor.return_type);
        let outcome = jackson().add_jackson_annotations(&mut builder, accessor);
        let rendered = builder
            .accessor_annotations()
            .iter()
            .map(ToString::to_string)
            .collect();
        (outcome, rendered)
    }

    fn json_property(value: &str) -> AnnotationOccurrence {
        AnnotationOccurrence::parse(&format!(
            "@com.fasterxml.jackson.annotation.JsonProperty(\"{}\")",
            value
        ))
        .unwrap()
    }

    #[test]
    fn test_not_created_without_trigger() {
        let ty = TypeDeclaration::new(QualifiedName::of("com.example", "Person"))
            .with_annotation(marker("com.example.FreeBuilder"));
        assert!(JacksonSupport::create(&ty).is_none());
    }

    #[test]
    fn test_created_with_duplicate_triggers() {
        let ty = jackson_type("com.example.Person").with_annotation(AnnotationOccurrence::marker(
            JSON_DESERIALIZE,
        ));
        assert!(JacksonSupport::create(&ty).is_some());
    }

    #[test]
    fn test_synthesizes_for_unannotated_accessor() {
        let (outcome, rendered) = decide(&AccessorDeclaration::new("getAge", "int"));
        assert_eq!(outcome, JacksonOutcome::Synthesized);
        assert_eq!(
            rendered,
            vec!["@com.fasterxml.jackson.annotation.JsonProperty(\"age\")"]
        );
    }

    #[test]
    fn test_copies_explicit_json_property() {
        let accessor = AccessorDeclaration::new("getAge", "int")
            .with_annotation(marker("javax.annotation.Nullable"))
            .with_annotation(json_property("yearsOld"));
        let (outcome, rendered) = decide(&accessor);
        assert_eq!(outcome, JacksonOutcome::Copied);
        assert_eq!(
            rendered,
            vec!["@com.fasterxml.jackson.annotation.JsonProperty(\"yearsOld\")"]
        );
    }

    #[test]
    fn test_copies_only_first_json_property() {
        let accessor = AccessorDeclaration::new("getAge", "int")
            .with_annotation(json_property("first"))
            .with_annotation(json_property("second"));
        let (_, rendered) = decide(&accessor);
        assert_eq!(
            rendered,
            vec!["@com.fasterxml.jackson.annotation.JsonProperty(\"first\")"]
        );
    }

    #[test]
    fn test_each_disabling_annotation_suppresses() {
        for disabling in DISABLE_PROPERTY_ANNOTATIONS {
            let accessor = AccessorDeclaration::new("getInternal", "String")
                .with_annotation(AnnotationOccurrence::marker(disabling.clone()));
            let (outcome, rendered) = decide(&accessor);
            assert_eq!(outcome, JacksonOutcome::Suppressed, "{}", disabling);
            assert!(rendered.is_empty());
        }
    }

    #[test]
    fn test_multiple_disabling_annotations_same_as_one() {
        let one = AccessorDeclaration::new("getInternal", "String")
            .with_annotation(marker("com.fasterxml.jackson.annotation.JsonIgnore"));
        let many = AccessorDeclaration::new("getInternal", "String")
            .with_annotation(marker("com.fasterxml.jackson.annotation.JsonValue"))
            .with_annotation(marker("com.fasterxml.jackson.annotation.JsonIgnore"))
            .with_annotation(marker("com.fasterxml.jackson.annotation.JsonUnwrapped"));
        assert_eq!(decide(&one), decide(&many));
    }

    #[test]
    fn test_explicit_name_wins_over_suppression() {
        let accessor = AccessorDeclaration::new("getAge", "int")
            .with_annotation(marker("com.fasterxml.jackson.annotation.JsonIgnore"))
            .with_annotation(json_property("yearsOld"));
        let (outcome, rendered) = decide(&accessor);
        assert_eq!(outcome, JacksonOutcome::Copied);
        assert_eq!(rendered.len(), 1);
    }

    #[test]
    fn test_unrelated_annotations_are_ignored() {
        let accessor = AccessorDeclaration::new("getAge", "int")
            .with_annotation(marker("com.example.JsonIgnore"))
            .with_annotation(marker("org.codehaus.jackson.annotate.JsonProperty"));
        let (outcome, _) = decide(&accessor);
        assert_eq!(outcome, JacksonOutcome::Synthesized);
    }

    #[test]
    fn test_never_touches_existing_annotations() {
        let existing = Excerpt::Annotation {
            literal: "@com.example.Existing".to_string(),
        };
        let mut builder = PropertyBuilder::new("age", "getAge", "int");
        builder.add_accessor_annotation(existing.clone());
        jackson().add_jackson_annotations(&mut builder, &AccessorDeclaration::new("getAge", "int"));
        assert_eq!(builder.accessor_annotations().len(), 2);
        assert_eq!(builder.accessor_annotations()[0], existing);
    }

    #[test]
    fn test_at_most_one_excerpt_for_every_combination() {
        let candidates = [
            json_property("x"),
            marker("com.fasterxml.jackson.annotation.JsonAnyGetter"),
            marker("com.fasterxml.jackson.annotation.JsonIgnore"),
            marker("com.fasterxml.jackson.annotation.JsonUnwrapped"),
            marker("com.fasterxml.jackson.annotation.JsonValue"),
            marker("com.example.Unrelated"),
        ];
        for mask in 0u32..(1 << candidates.len()) {
            let mut accessor = AccessorDeclaration::new("getAge", "int");
            for (i, candidate) in candidates.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    accessor = accessor.with_annotation(candidate.clone());
                }
            }
            let (outcome, rendered) = decide(&accessor);
            let expected = match outcome {
                JacksonOutcome::Suppressed => 0,
                JacksonOutcome::Copied | JacksonOutcome::Synthesized => 1,
            };
            assert_eq!(rendered.len(), expected, "mask {:#b}", mask);
            if mask & 1 != 0 {
                assert_eq!(outcome, JacksonOutcome::Copied);
            }
        }
    }
}
