use crate::meta::Annotation;
use crate::meta::AnnotationFamily;
use crate::meta::AnnotationProvider;
use crate::meta::DirectiveReference;
use crate::meta::MetadataError;
use crate::meta::MetadataManifest;
use crate::meta::TypeRef;
use crate::meta::TypeResolver;
use crate::meta::TypeShape;
use crate::types::DirectiveLocation;
use crate::types::TypeKind;

type Result<T> = std::result::Result<T, MetadataError>;

const MANIFEST: &str = r#"{
    "options": { "require_method_declarations": false },
    "scalars": [
        { "type_name": "shop.Money", "graph_name": "Money", "value_type": true }
    ],
    "types": [
        {
            "name": "shop.Widget",
            "annotations": [
                { "kind": "description", "text": "A thing for sale" },
                { "kind": "apply_directive", "directive": { "name": "cached" }, "arguments": [30] }
            ],
            "properties": [
                { "name": "Price", "type_ref": "shop.Money" },
                { "name": "Tags", "type_ref": "List<String>", "has_setter": false }
            ],
            "methods": [
                {
                    "name": "Related",
                    "return_type": "Async<List<shop.Widget>>",
                    "annotations": [
                        { "kind": "graph_field", "name": "related", "complexity": 2.5 }
                    ]
                }
            ]
        },
        {
            "name": "shop.CachedDirective",
            "base_types": ["graph.Directive"],
            "annotations": [
                { "kind": "directive_locations", "locations": "FIELD_DEFINITION | OBJECT" }
            ]
        },
        { "name": "shop.Color", "shape": "enum", "enum_repr": "u8" }
    ]
}"#;

#[test]
fn manifest_builds_a_catalog() -> Result<()> {
    let manifest = MetadataManifest::from_json_str(MANIFEST)?;
    let catalog = manifest.to_catalog()?;

    assert!(!manifest.options.require_method_declarations);
    assert!(!manifest.options.require_property_declarations);
    assert!(catalog.is_scalar("shop.Money"));
    assert!(catalog.is_value_type("shop.Money"));
    assert_eq!(catalog.graph_type_name("shop.Money", TypeKind::Scalar), "Money");
    assert!(catalog.is_assignable("shop.CachedDirective", "graph.Directive"));

    let color = catalog.find_type("shop.Color");
    assert_eq!(color.map(|descriptor| descriptor.shape), Some(TypeShape::Enum));

    Ok(())
}

#[test]
fn manifest_annotations_deserialize() -> Result<()> {
    let manifest = MetadataManifest::from_json_str(MANIFEST)?;
    let widget = &manifest.types[0];

    assert!(widget.has_annotation(AnnotationFamily::Description));
    let Some(Annotation::ApplyDirective(application)) =
        widget.first_annotation(AnnotationFamily::ApplyDirective) else {
        panic!("expected an applied directive");
    };
    assert_eq!(application.directive, DirectiveReference::Name("cached".to_string()));

    let related = &widget.methods[0];
    assert_eq!(
        related.return_type,
        TypeRef::asynchronous(TypeRef::list(TypeRef::named("shop.Widget"))),
    );
    let declaration =
        related.first_annotation(AnnotationFamily::GraphField)
            .and_then(Annotation::field_declaration);
    assert_eq!(declaration.and_then(|decl| decl.complexity), Some(2.5));
    assert!(!widget.properties[1].has_setter);

    let directive = &manifest.types[1];
    assert_eq!(
        directive.first_annotation(AnnotationFamily::DirectiveLocations),
        Some(&Annotation::DirectiveLocations {
            locations: DirectiveLocation::FIELD_DEFINITION | DirectiveLocation::OBJECT,
        }),
    );

    Ok(())
}

#[test]
fn malformed_manifest_is_reported() {
    let result = MetadataManifest::from_json_str(
        r#"{ "types": [{ "name": "shop.Widget", "properties": [{ "name": "X", "type_ref": "List<" }] }] }"#,
    );

    assert!(matches!(result, Err(MetadataError::ManifestParse { path: None, .. })));
}
