use crate::TemplateError;
use crate::meta::PropertyDescriptor;
use crate::meta::TypeDescriptor;
use crate::meta::TypeRef;
use crate::meta::TypeShape;
use crate::templates::InputObjectTypeTemplate;
use crate::templates::TemplateOptions;
use crate::templates::tests::test_utils;
use crate::types::DependentType;
use crate::types::TypeKind;

type Result<T> = std::result::Result<T, TemplateError>;

const FILTER: &str = "shop.Filter";

fn compile(types: Vec<TypeDescriptor>) -> Result<InputObjectTypeTemplate> {
    let resolver = test_utils::resolver(types);
    let descriptor = resolver.find_type(FILTER).expect("described");
    let mut template =
        InputObjectTypeTemplate::new(descriptor, resolver, TemplateOptions::default())?;
    template.parse();
    template.validate_or_throw(true)?;
    Ok(template)
}

fn filter_type() -> TypeDescriptor {
    TypeDescriptor::new(FILTER, TypeShape::Class)
        .with_property(PropertyDescriptor::new("term", TypeRef::named("String")))
        .with_property(PropertyDescriptor::new("limit", TypeRef::named("i32")))
}

#[test]
fn settable_properties_become_input_fields() -> Result<()> {
    let template = compile(vec![
        filter_type()
            .with_property(PropertyDescriptor::new("summary", TypeRef::named("String")).read_only())
            .with_property(PropertyDescriptor::new("category", TypeRef::named("shop.Category"))),
        TypeDescriptor::new("shop.Category", TypeShape::Class),
    ])?;

    assert_eq!(template.name(), "Input_Filter");
    assert_eq!(template.route().path(), "[type]/Input_Filter");
    let names: Vec<&str> = template.fields().iter().map(|field| field.name()).collect();
    assert_eq!(names, vec!["term", "limit", "category"]);

    let category = template.fields().get("category").expect("category field");
    assert_eq!(category.type_expression().expect("parsed").to_string(), "Input_Category");
    assert!(template.required_types().contains(
        &DependentType::new("shop.Category", TypeKind::InputObject),
    ));

    Ok(())
}

#[test]
fn input_objects_need_a_default_constructor() {
    let result = compile(vec![filter_type().without_default_constructor()]);

    assert!(matches!(result, Err(TemplateError::MissingDefaultConstructor { .. })));
}

#[test]
fn interfaces_can_not_be_input_fields() {
    let result = compile(vec![
        filter_type()
            .with_property(PropertyDescriptor::new("owner", TypeRef::named("shop.Named"))),
        TypeDescriptor::new("shop.Named", TypeShape::Interface),
    ]);

    assert!(matches!(result, Err(TemplateError::InvalidFieldType { .. })));
}
