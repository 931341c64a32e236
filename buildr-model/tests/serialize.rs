//! JSON shape of the declaration model.

use buildr_core::QualifiedName;
use buildr_model::{AccessorDeclaration, AnnotationOccurrence, TypeDeclaration};

#[test]
fn test_type_declaration_json() {
    let ty = TypeDeclaration::new(QualifiedName::of("com.example", "Person"))
        .with_annotation(AnnotationOccurrence::marker(QualifiedName::of(
            "com.example",
            "Marker",
        )))
        .with_accessor(AccessorDeclaration::new("getAge", "int"));

    let json = serde_json::to_value(&ty).unwrap();
    assert_eq!(json["name"], "com.example.Person");
    assert_eq!(json["annotations"][0]["annotation_type"], "com.example.Marker");
    assert_eq!(json["annotations"][0]["literal"], "@com.example.Marker");
    assert_eq!(json["accessors"][0]["name"], "getAge");
    assert_eq!(json["accessors"][0]["return_type"], "int");
}
