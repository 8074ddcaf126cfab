use crate::constants::well_known;
use crate::meta::Annotation;
use crate::meta::MetadataError;
use crate::meta::ScalarDeclaration;
use crate::meta::TypeCatalog;
use crate::meta::TypeDescriptor;
use crate::meta::TypeResolver;
use crate::meta::TypeShape;
use crate::types::TypeKind;

type Result<T> = std::result::Result<T, MetadataError>;

#[test]
fn builtin_scalars_are_registered() {
    let catalog = TypeCatalog::new();

    assert!(catalog.is_scalar("i32"));
    assert_eq!(catalog.graph_type_name("i32", TypeKind::Scalar), "Int");
    assert_eq!(catalog.graph_type_name("graph.Id", TypeKind::Scalar), "ID");
    assert!(catalog.is_value_type("bool"));
    assert!(!catalog.is_value_type("String"));
    assert!(catalog.find_type(well_known::ACTION_RESULT).is_some());
}

#[test]
fn input_objects_are_prefixed_unless_renamed() -> Result<()> {
    let catalog = TypeCatalog::with_types([
        TypeDescriptor::new("shop.Filter", TypeShape::Class),
        TypeDescriptor::new("shop.Range", TypeShape::Struct)
            .with_annotation(Annotation::GraphType { name: "PriceRange".to_string() }),
    ])?;

    assert_eq!(catalog.graph_type_name("shop.Filter", TypeKind::Object), "Filter");
    assert_eq!(
        catalog.graph_type_name("shop.Filter", TypeKind::InputObject),
        "Input_Filter",
    );
    assert_eq!(
        catalog.graph_type_name("shop.Range", TypeKind::InputObject),
        "PriceRange",
    );

    Ok(())
}

#[test]
fn assignability_follows_bases_and_interfaces() -> Result<()> {
    let catalog = TypeCatalog::with_types([
        TypeDescriptor::new("zoo.Animal", TypeShape::Interface),
        TypeDescriptor::new("zoo.Pet", TypeShape::Class).with_interface("zoo.Animal"),
        TypeDescriptor::new("zoo.Dog", TypeShape::Class).with_base_type("zoo.Pet"),
        TypeDescriptor::new("zoo.Rock", TypeShape::Class),
    ])?;

    assert!(catalog.is_assignable("zoo.Dog", "zoo.Animal"));
    assert!(catalog.is_assignable("zoo.Dog", "zoo.Dog"));
    assert!(catalog.is_assignable("zoo.Rock", well_known::OBJECT));
    assert!(!catalog.is_assignable("zoo.Rock", "zoo.Animal"));
    assert!(!catalog.is_assignable("zoo.Animal", "zoo.Dog"));

    Ok(())
}

#[test]
fn kinds_are_inferred_from_shape_and_context() -> Result<()> {
    let catalog = TypeCatalog::with_types([
        TypeDescriptor::new("zoo.Species", TypeShape::Enum),
        TypeDescriptor::new("zoo.Animal", TypeShape::Interface),
        TypeDescriptor::new("zoo.Habitat", TypeShape::Class),
    ])?;

    assert_eq!(catalog.resolve_type_kind("i32", TypeKind::Object), TypeKind::Scalar);
    assert_eq!(catalog.resolve_type_kind("zoo.Species", TypeKind::InputObject), TypeKind::Enum);
    assert_eq!(catalog.resolve_type_kind("zoo.Animal", TypeKind::Object), TypeKind::Interface);
    assert_eq!(catalog.resolve_type_kind("zoo.Habitat", TypeKind::Object), TypeKind::Object);
    assert_eq!(
        catalog.resolve_type_kind("zoo.Habitat", TypeKind::InputObject),
        TypeKind::InputObject,
    );

    Ok(())
}

#[test]
fn duplicate_registrations_are_rejected() {
    let mut catalog = TypeCatalog::new();

    assert!(matches!(
        catalog.insert_type(TypeDescriptor::new(well_known::OBJECT, TypeShape::Class)),
        Err(MetadataError::DuplicateType { .. }),
    ));
    assert!(matches!(
        catalog.register_scalar(ScalarDeclaration::new("i32", "Integer", true)),
        Err(MetadataError::DuplicateScalar { .. }),
    ));
}
