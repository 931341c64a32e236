//! End-to-end Jackson policy scenarios through `analyze`.

use buildr_codegen::{
    analysis::analyze,
    builder::CodeBuilder,
    feature::{Capability, CompilerEnvironment, FeatureRegistry, SOURCE_LEVEL, SourceLevel},
    jackson::JSON_DESERIALIZE,
    metadata::Metadata,
};
use buildr_core::QualifiedName;
use buildr_model::{AccessorDeclaration, AnnotationOccurrence, TypeDeclaration};

fn person() -> TypeDeclaration {
    TypeDeclaration::new(QualifiedName::of("com.example", "Person"))
}

fn with_trigger(ty: TypeDeclaration) -> TypeDeclaration {
    ty.with_annotation(
        AnnotationOccurrence::parse(
            "@com.fasterxml.jackson.databind.annotation.JsonDeserialize(builder = Person.Builder.class)",
        )
        .unwrap(),
    )
}

fn rendered_annotations(metadata: &Metadata, property: &str) -> String {
    let property = metadata
        .properties
        .iter()
        .find(|p| p.name == property)
        .expect("property exists");
    let mut code = CodeBuilder::java();
    for excerpt in &property.accessor_annotations {
        excerpt.add_to(&mut code);
    }
    code.build()
}

#[test]
fn test_no_trigger_leaves_property_untouched() {
    let ty = person().with_accessor(AccessorDeclaration::new("getAge", "int"));
    let metadata = analyze(&ty);
    assert_eq!(rendered_annotations(&metadata, "age"), "");
}

#[test]
fn test_trigger_synthesizes_default_name() {
    let ty = with_trigger(person()).with_accessor(AccessorDeclaration::new("getAge", "int"));
    let metadata = analyze(&ty);
    assert_eq!(
        rendered_annotations(&metadata, "age"),
        "@com.fasterxml.jackson.annotation.JsonProperty(\"age\")\n"
    );
}

#[test]
fn test_trigger_copies_explicit_name() {
    let ty = with_trigger(person()).with_accessor(
        AccessorDeclaration::new("getAge", "int").with_annotation(
            AnnotationOccurrence::parse(r#"@com.fasterxml.jackson.annotation.JsonProperty("yearsOld")"#)
                .unwrap(),
        ),
    );
    let metadata = analyze(&ty);
    assert_eq!(
        rendered_annotations(&metadata, "age"),
        "@com.fasterxml.jackson.annotation.JsonProperty(\"yearsOld\")\n"
    );
}

#[test]
fn test_trigger_respects_suppression() {
    let ty = with_trigger(person()).with_accessor(
        AccessorDeclaration::new("getInternal", "String").with_annotation(
            AnnotationOccurrence::parse("@com.fasterxml.jackson.annotation.JsonAnyGetter").unwrap(),
        ),
    );
    let metadata = analyze(&ty);
    assert_eq!(rendered_annotations(&metadata, "internal"), "");
}

#[test]
fn test_marker_trigger_is_enough() {
    let ty = person()
        .with_annotation(AnnotationOccurrence::marker(JSON_DESERIALIZE))
        .with_accessor(AccessorDeclaration::new("isActive", "boolean"));
    let metadata = analyze(&ty);
    assert_eq!(
        rendered_annotations(&metadata, "active"),
        "@com.fasterxml.jackson.annotation.JsonProperty(\"active\")\n"
    );
}

#[test]
fn test_capability_extremes() {
    let lowest = FeatureRegistry::standard(&CompilerEnvironment::new("1.6".parse().unwrap()));
    let highest = FeatureRegistry::standard(&CompilerEnvironment::new("11".parse().unwrap()));
    assert_eq!(*lowest.get(&SOURCE_LEVEL), SourceLevel::Java6);
    assert_eq!(*highest.get(&SOURCE_LEVEL), SourceLevel::Java8);
    for capability in Capability::ALL {
        assert!(!lowest.get(&SOURCE_LEVEL).supports(capability));
        assert!(highest.get(&SOURCE_LEVEL).supports(capability));
    }
}
