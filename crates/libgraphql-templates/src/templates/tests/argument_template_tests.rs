use crate::TemplateError;
use crate::Value;
use crate::constants::well_known;
use crate::meta::Annotation;
use crate::meta::EnumMemberDescriptor;
use crate::meta::FieldDeclaration;
use crate::meta::MethodDescriptor;
use crate::meta::ParameterDescriptor;
use crate::meta::TypeDescriptor;
use crate::meta::TypeRef;
use crate::meta::TypeShape;
use crate::route::SchemaItemCollection;
use crate::route::SchemaItemPath;
use crate::templates::ArgumentModifiers;
use crate::templates::ArgumentOwner;
use crate::templates::ArgumentTemplate;
use crate::templates::FieldOwner;
use crate::templates::FieldResolutionMode;
use crate::templates::FieldSource;
use crate::templates::FieldTemplate;
use crate::templates::tests::test_utils;
use crate::templates::tests::test_utils::PRODUCT;
use crate::types::DependentType;
use crate::types::TypeKind;

type Result<T> = std::result::Result<T, TemplateError>;

fn color_enum() -> TypeDescriptor {
    TypeDescriptor::new("paint.Color", TypeShape::Enum)
        .with_enum_member(EnumMemberDescriptor::new("Red", 0))
        .with_enum_member(
            EnumMemberDescriptor::new("Green", 1)
                .with_annotation(Annotation::EnumValue { name: "GREEN".to_string() }),
        )
}

fn owner(source_type: Option<&str>, mode: FieldResolutionMode) -> ArgumentOwner {
    ArgumentOwner::new(
        "shop.Product.Price",
        SchemaItemPath::join(SchemaItemCollection::Types, ["Product", "Price"]),
        source_type.map(str::to_string),
        mode,
    )
}

fn parse_argument(parameter: ParameterDescriptor) -> ArgumentTemplate {
    let resolver = test_utils::resolver([
        test_utils::product_type(),
        color_enum(),
        TypeDescriptor::new("shop.Filter", TypeShape::Class),
    ]);
    let mut argument = ArgumentTemplate::new(
        parameter,
        &owner(Some(PRODUCT), FieldResolutionMode::PerSourceItem),
        resolver,
    );
    argument.parse();
    argument
}

#[test]
fn modifiers_are_inferred_from_parameter_shapes() -> Result<()> {
    let signal = TypeRef::named(well_known::CANCELLATION_SIGNAL);
    let template = test_utils::compile_object(PRODUCT, vec![
        test_utils::product_type().with_method(
            MethodDescriptor::new("Price", TypeRef::named("f64"))
                .with_annotation(test_utils::graph_field(FieldDeclaration::default()))
                .with_parameter(ParameterDescriptor::new("currency", TypeRef::named("String")))
                .with_parameter(ParameterDescriptor::new("signal", signal.to_owned()))
                .with_parameter(ParameterDescriptor::new("product", TypeRef::named(PRODUCT)))
                .with_parameter(
                    ParameterDescriptor::new("clock", TypeRef::named("String"))
                        .with_annotation(Annotation::FromServices),
                ),
        ),
    ])?;

    let field = template.fields().get("Price").expect("field");
    let modifiers: Vec<ArgumentModifiers> =
        field.arguments().iter().map(|arg| arg.modifiers()).collect();
    assert_eq!(modifiers, vec![
        ArgumentModifiers::PART_OF_SCHEMA,
        ArgumentModifiers::CANCELLATION_SIGNAL,
        ArgumentModifiers::SOURCE_DATA,
        ArgumentModifiers::INTERNAL_ONLY,
    ]);
    let schema_names: Vec<&str> = field.schema_arguments().map(|arg| arg.name()).collect();
    assert_eq!(schema_names, vec!["currency"]);

    Ok(())
}

#[test]
fn only_the_first_cancellation_parameter_is_claimed() {
    let signal = TypeRef::named(well_known::CANCELLATION_SIGNAL);
    let resolver = test_utils::resolver([test_utils::product_type()]);
    let mut field = FieldTemplate::new(
        FieldSource::Method(
            MethodDescriptor::new("Price", TypeRef::named("f64"))
                .with_parameter(ParameterDescriptor::new("signal", signal.to_owned()))
                .with_parameter(ParameterDescriptor::new("fallback", signal)),
        ),
        FieldOwner::new(
            PRODUCT,
            TypeKind::Object,
            SchemaItemPath::join(SchemaItemCollection::Types, ["Product"]),
        ),
        resolver,
    );
    field.parse();

    let modifiers: Vec<ArgumentModifiers> =
        field.arguments().iter().map(|arg| arg.modifiers()).collect();
    assert_eq!(modifiers, vec![
        ArgumentModifiers::CANCELLATION_SIGNAL,
        ArgumentModifiers::PART_OF_SCHEMA,
    ]);
    let schema_names: Vec<&str> = field.schema_arguments().map(|arg| arg.name()).collect();
    assert_eq!(schema_names, vec!["fallback"]);
}

#[test]
fn only_the_first_source_parameter_receives_the_source() -> Result<()> {
    let template = test_utils::compile_object(PRODUCT, vec![
        test_utils::product_type().with_method(
            MethodDescriptor::new("Compare", TypeRef::named("bool"))
                .with_annotation(test_utils::graph_field(FieldDeclaration::default()))
                .with_parameter(ParameterDescriptor::new("source", TypeRef::named(PRODUCT)))
                .with_parameter(ParameterDescriptor::new("other", TypeRef::named(PRODUCT))),
        ),
    ])?;

    let field = template.fields().get("Compare").expect("field");
    let arguments = field.arguments();
    assert!(arguments[0].modifiers().contains(ArgumentModifiers::SOURCE_DATA));
    assert!(arguments[1].is_part_of_schema());
    assert_eq!(arguments[1].kind(), TypeKind::InputObject);
    assert_eq!(
        arguments[1].type_expression().expect("parsed").to_string(),
        "Input_Product",
    );

    Ok(())
}

#[test]
fn default_values_relax_the_outer_non_null() {
    let required = parse_argument(ParameterDescriptor::new("limit", TypeRef::named("i32")));
    assert_eq!(required.signature(), "limit: Int!");

    let defaulted = parse_argument(
        ParameterDescriptor::new("limit", TypeRef::named("i32")).with_default(Value::Int(10)),
    );
    assert_eq!(defaulted.signature(), "limit: Int = 10");
    assert_eq!(defaulted.default_value(), Some(&Value::Int(10)));
}

#[test]
fn numeric_enum_defaults_become_labels() {
    let red = parse_argument(
        ParameterDescriptor::new("color", TypeRef::named("paint.Color"))
            .with_default(Value::Int(0)),
    );
    assert_eq!(red.default_value(), Some(&Value::Enum("Red".to_string())));

    let renamed = parse_argument(
        ParameterDescriptor::new("color", TypeRef::named("paint.Color"))
            .with_default(Value::Int(1)),
    );
    assert_eq!(renamed.default_value(), Some(&Value::Enum("GREEN".to_string())));

    let unmatched = parse_argument(
        ParameterDescriptor::new("color", TypeRef::named("paint.Color"))
            .with_default(Value::Int(7)),
    );
    assert_eq!(unmatched.default_value(), Some(&Value::Int(7)));
}

#[test]
fn declared_names_replace_the_parameter_placeholder() -> Result<()> {
    let argument = parse_argument(
        ParameterDescriptor::new("term", TypeRef::named("String"))
            .with_annotation(Annotation::FromGraphQL {
                name: Some("[parameter]Filter".to_string()),
                type_expression: None,
            }),
    );

    assert_eq!(argument.name(), "termFilter");
    assert_eq!(argument.route().path(), "[type]/Product/Price/termFilter");
    argument.validate_or_throw(true)?;

    Ok(())
}

#[test]
fn declared_type_expressions_are_checked() {
    let argument = parse_argument(
        ParameterDescriptor::new("ids", TypeRef::named("i32"))
            .with_annotation(Annotation::FromGraphQL {
                name: None,
                type_expression: Some("[Type!]".to_string()),
            }),
    );

    assert!(matches!(
        argument.validate_or_throw(true),
        Err(TemplateError::IncompatibleTypeExpression { .. }),
    ));
}

#[test]
fn internal_arguments_require_nothing() {
    let internal = parse_argument(
        ParameterDescriptor::new("filter", TypeRef::named("shop.Filter"))
            .with_annotation(Annotation::FromServices),
    );
    assert!(internal.required_types().is_empty());

    let input = parse_argument(ParameterDescriptor::new("filter", TypeRef::named("shop.Filter")));
    assert_eq!(input.required_types(), vec![
        DependentType::new("shop.Filter", TypeKind::InputObject),
    ]);
}

#[test]
fn batch_source_parameters_must_be_lists_of_the_source() {
    let resolver = test_utils::resolver([test_utils::product_type()]);
    let batch_owner = owner(Some(PRODUCT), FieldResolutionMode::Batch);

    let mut single = ArgumentTemplate::new(
        ParameterDescriptor::new("product", TypeRef::named(PRODUCT)),
        &batch_owner,
        resolver.clone(),
    );
    single.parse();
    assert!(!single.is_source_data_argument());

    let mut list = ArgumentTemplate::new(
        ParameterDescriptor::new(
            "products",
            TypeRef::optional(TypeRef::list(TypeRef::named(PRODUCT))),
        ),
        &batch_owner,
        resolver,
    );
    list.parse();
    assert!(list.is_source_data_argument());
    assert_eq!(list.modifiers(), ArgumentModifiers::SOURCE_DATA);
}
