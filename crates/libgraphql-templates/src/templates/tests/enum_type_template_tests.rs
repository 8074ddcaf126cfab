use crate::DuplicateEnumValue;
use crate::TemplateError;
use crate::TemplateErrorKind;
use crate::meta::Annotation;
use crate::meta::EnumMemberDescriptor;
use crate::meta::EnumRepr;
use crate::meta::TypeDescriptor;
use crate::meta::TypeShape;
use crate::templates::EnumTypeTemplate;
use crate::templates::tests::test_utils;

type Result<T> = std::result::Result<T, TemplateError>;

fn compile(descriptor: TypeDescriptor) -> Result<EnumTypeTemplate> {
    let type_name = descriptor.name.to_owned();
    let resolver = test_utils::resolver([descriptor]);
    let descriptor = resolver.find_type(type_name.as_str()).expect("described");
    let mut template = EnumTypeTemplate::new(descriptor, resolver)?;
    template.parse();
    template.validate_or_throw(true)?;
    Ok(template)
}

#[test]
fn distinct_values_validate() -> Result<()> {
    let template = compile(
        TypeDescriptor::new("paint.Color", TypeShape::Enum)
            .with_enum_member(EnumMemberDescriptor::new("Red", 0))
            .with_enum_member(EnumMemberDescriptor::new("Green", 1))
            .with_enum_member(EnumMemberDescriptor::new("Blue", 2)),
    )?;

    assert_eq!(template.name(), "Color");
    assert_eq!(template.route().path(), "[enum]/Color");
    let labels: Vec<(&str, &str)> =
        template.values().iter()
            .map(|value| (value.label(), value.value()))
            .collect();
    assert_eq!(labels, vec![("Red", "0"), ("Green", "1"), ("Blue", "2")]);
    assert_eq!(
        template.value("Green").map(|value| value.route().path()),
        Some("[enum]/Color/Green"),
    );

    Ok(())
}

#[test]
fn shared_values_fail_listing_every_label() {
    let result = compile(
        TypeDescriptor::new("paint.Color", TypeShape::Enum)
            .with_enum_member(EnumMemberDescriptor::new("Red", 0))
            .with_enum_member(EnumMemberDescriptor::new("Crimson", 0))
            .with_enum_member(EnumMemberDescriptor::new("Green", 1))
            .with_enum_member(EnumMemberDescriptor::new("Lime", 1))
            .with_enum_member(EnumMemberDescriptor::new("Scarlet", 0))
            .with_enum_member(EnumMemberDescriptor::new("Blue", 2)),
    );

    let Err(err) = result else {
        panic!("expected duplicate enum values to fail");
    };
    assert_eq!(err.kind(), TemplateErrorKind::Aggregate);
    let TemplateError::DuplicateEnumValues { internal_name, duplicates } = err else {
        panic!("expected DuplicateEnumValues");
    };
    assert_eq!(internal_name, "paint.Color");
    assert_eq!(duplicates, vec![
        DuplicateEnumValue {
            value: "0".to_string(),
            labels: vec!["Red".to_string(), "Crimson".to_string(), "Scarlet".to_string()],
        },
        DuplicateEnumValue {
            value: "1".to_string(),
            labels: vec!["Green".to_string(), "Lime".to_string()],
        },
    ]);
}

#[test]
fn skipped_labels_do_not_collide() -> Result<()> {
    let template = compile(
        TypeDescriptor::new("paint.Color", TypeShape::Enum)
            .with_enum_member(EnumMemberDescriptor::new("Red", 0))
            .with_enum_member(
                EnumMemberDescriptor::new("LegacyRed", 0).with_annotation(Annotation::Skip),
            ),
    )?;

    assert_eq!(template.values().len(), 1);
    assert!(template.value("LegacyRed").is_none());

    Ok(())
}

#[test]
fn values_are_compared_in_the_declared_representation() {
    // 255 and -1 share a bit pattern in a signed byte.
    let result = compile(
        TypeDescriptor::new("net.Flag", TypeShape::Enum)
            .with_enum_repr(EnumRepr::I8)
            .with_enum_member(EnumMemberDescriptor::new("All", 255))
            .with_enum_member(EnumMemberDescriptor::new("Any", -1)),
    );

    assert!(matches!(
        result,
        Err(TemplateError::DuplicateEnumValues { ref duplicates, .. })
            if duplicates[0].value == "-1",
    ));
}

#[test]
fn renamed_values_keep_their_label() -> Result<()> {
    let template = compile(
        TypeDescriptor::new("paint.Color", TypeShape::Enum)
            .with_enum_member(
                EnumMemberDescriptor::new("Red", 0)
                    .with_annotation(Annotation::EnumValue { name: "RED".to_string() })
                    .with_annotation(Annotation::Deprecated { reason: Some("use Crimson".to_string()) }),
            ),
    )?;

    let red = template.value("RED").expect("renamed value");
    assert_eq!(red.label(), "Red");
    assert_eq!(red.route().path(), "[enum]/Color/RED");
    assert_eq!(red.deprecation().and_then(|dep| dep.reason()), Some("use Crimson"));

    Ok(())
}

#[test]
fn non_enum_backing_types_are_rejected() {
    let resolver = test_utils::resolver([test_utils::product_type()]);
    let descriptor = resolver.find_type(test_utils::PRODUCT).expect("described");

    let err = EnumTypeTemplate::new(descriptor, resolver).expect_err("wrong shape");
    assert_eq!(err.kind(), TemplateErrorKind::Usage);
}
