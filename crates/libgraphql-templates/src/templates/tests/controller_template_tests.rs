use crate::TemplateError;
use crate::TemplateErrorKind;
use crate::constants::well_known;
use crate::meta::Annotation;
use crate::meta::FieldDeclaration;
use crate::meta::MethodDescriptor;
use crate::meta::ParameterDescriptor;
use crate::meta::TypeDescriptor;
use crate::meta::TypeExtensionDeclaration;
use crate::meta::TypeRef;
use crate::meta::TypeShape;
use crate::templates::ControllerTemplate;
use crate::templates::FieldResolutionMode;
use crate::templates::tests::test_utils;
use crate::templates::tests::test_utils::PRODUCT;
use crate::templates::tests::test_utils::REVIEW;

type Result<T> = std::result::Result<T, TemplateError>;

const CONTROLLER: &str = "shop.ProductsController";

fn controller_type() -> TypeDescriptor {
    TypeDescriptor::new(CONTROLLER, TypeShape::Class)
        .with_base_type(well_known::CONTROLLER_BASE)
}

fn query(name: &str, return_type: TypeRef) -> MethodDescriptor {
    MethodDescriptor::new(name, return_type)
        .with_annotation(Annotation::Query(FieldDeclaration::default()))
}

fn batch_extension(name: &str) -> MethodDescriptor {
    MethodDescriptor::new(
        name,
        TypeRef::asynchronous(TypeRef::map(
            TypeRef::named(PRODUCT),
            TypeRef::list(TypeRef::named(REVIEW)),
        )),
    ).with_annotation(Annotation::TypeExtension(TypeExtensionDeclaration {
        target: PRODUCT.to_string(),
        mode: FieldResolutionMode::Batch,
        field: FieldDeclaration::default(),
    }))
}

fn compile(controller: TypeDescriptor) -> Result<ControllerTemplate> {
    let resolver = test_utils::resolver([
        controller,
        test_utils::product_type(),
        test_utils::review_type(),
    ]);
    let descriptor = resolver.find_type(CONTROLLER).expect("described");
    let mut template = ControllerTemplate::new(descriptor, resolver)?;
    template.parse();
    template.validate_or_throw(true)?;
    Ok(template)
}

fn action_paths(template: &ControllerTemplate) -> Vec<String> {
    template.actions().iter()
        .map(|action| action.route().path().to_string())
        .collect()
}

#[test]
fn actions_are_routed_beneath_the_controller_name() -> Result<()> {
    let template = compile(
        controller_type()
            .with_method(
                query("Search", TypeRef::list(TypeRef::named(PRODUCT)))
                    .with_parameter(ParameterDescriptor::new("term", TypeRef::named("String"))),
            )
            .with_method(
                MethodDescriptor::new("Create", TypeRef::named(PRODUCT))
                    .with_annotation(Annotation::Mutation(FieldDeclaration::default())),
            )
            .with_method(MethodDescriptor::new("Helper", TypeRef::named("String"))),
    )?;

    assert_eq!(template.name(), "Products");
    assert_eq!(template.route().path(), "[type]/Products");
    assert_eq!(action_paths(&template), vec![
        "[query]/Products/Search".to_string(),
        "[mutation]/Products/Create".to_string(),
    ]);
    let search = template.actions().get("Search").expect("search action");
    assert_eq!(search.source_type(), None);
    assert_eq!(search.schema_arguments().count(), 1);
    assert_eq!(search.type_expression().expect("parsed").to_string(), "[Product]");

    Ok(())
}

#[test]
fn root_controllers_and_actions_skip_the_controller_segment() -> Result<()> {
    let rooted = compile(
        controller_type()
            .with_annotation(Annotation::GraphRoot)
            .with_method(query("Search", TypeRef::named(PRODUCT))),
    )?;
    assert_eq!(action_paths(&rooted), vec!["[query]/Search".to_string()]);

    let root_action = compile(
        controller_type().with_method(
            MethodDescriptor::new("Featured", TypeRef::named(PRODUCT))
                .with_annotation(Annotation::Query(FieldDeclaration {
                    root: true,
                    ..FieldDeclaration::default()
                })),
        ),
    )?;
    assert_eq!(action_paths(&root_action), vec!["[query]/Featured".to_string()]);

    Ok(())
}

#[test]
fn graph_routes_and_name_templates_shape_action_paths() -> Result<()> {
    let template = compile(
        controller_type()
            .with_annotation(Annotation::GraphRoute { path: "catalog/items".to_string() })
            .with_method(
                MethodDescriptor::new("Search", TypeRef::named(PRODUCT))
                    .with_annotation(Annotation::Query(FieldDeclaration {
                        name: Some("find[action]".to_string()),
                        ..FieldDeclaration::default()
                    })),
            ),
    )?;

    assert_eq!(template.action_segments(), &["catalog".to_string(), "items".to_string()]);
    assert_eq!(action_paths(&template), vec!["[query]/catalog/items/findSearch".to_string()]);

    Ok(())
}

#[test]
fn actions_sharing_a_path_fail() {
    let result = compile(
        controller_type()
            .with_method(query("Search", TypeRef::named(PRODUCT)))
            .with_method(
                MethodDescriptor::new("SearchAll", TypeRef::named(PRODUCT))
                    .with_annotation(Annotation::Query(FieldDeclaration {
                        name: Some("Search".to_string()),
                        ..FieldDeclaration::default()
                    })),
            ),
    );

    let Err(err) = result else {
        panic!("expected duplicate action paths to fail");
    };
    assert_eq!(err.kind(), TemplateErrorKind::Aggregate);
    assert!(err.to_string().contains("[query]/Products/Search"));
}

#[test]
fn controller_security_applies_to_every_action() -> Result<()> {
    let template = compile(
        controller_type()
            .with_annotation(Annotation::Authorize {
                policy: Some("staff".to_string()),
                roles: vec![],
            })
            .with_method(query("Search", TypeRef::named(PRODUCT))),
    )?;

    let search = template.actions().get("Search").expect("search action");
    let groups = search.security_groups();
    assert_eq!(groups[0].policies()[0].policy(), Some("staff"));
    assert!(groups[1].is_empty());

    Ok(())
}

#[test]
fn batch_extension_with_source_list_and_map_return_validates() -> Result<()> {
    let template = compile(
        controller_type().with_method(
            batch_extension("Reviews").with_parameter(ParameterDescriptor::new(
                "products",
                TypeRef::list(TypeRef::named(PRODUCT)),
            )),
        ),
    )?;

    let reviews = template.actions().get("Reviews").expect("extension field");
    assert_eq!(reviews.route().path(), "[type]/Product/Reviews");
    assert_eq!(reviews.mode(), FieldResolutionMode::Batch);
    assert_eq!(reviews.source_type(), Some(PRODUCT));
    assert_eq!(reviews.object_type(), REVIEW);
    assert_eq!(reviews.type_expression().expect("parsed").to_string(), "[Review]");
    assert_eq!(reviews.schema_arguments().count(), 0);

    Ok(())
}

#[test]
fn batch_extension_without_source_list_fails() {
    let result = compile(
        controller_type().with_method(
            batch_extension("Reviews").with_parameter(ParameterDescriptor::new(
                "ids",
                TypeRef::list(TypeRef::named("i32")),
            )),
        ),
    );

    assert!(matches!(
        result,
        Err(TemplateError::MissingBatchSourceArgument { ref source_type, .. })
            if source_type == PRODUCT,
    ));
}

#[test]
fn batch_extension_must_return_a_map_keyed_by_the_source() {
    let result = compile(
        controller_type().with_method(
            MethodDescriptor::new("Reviews", TypeRef::list(TypeRef::named(REVIEW)))
                .with_annotation(Annotation::TypeExtension(TypeExtensionDeclaration {
                    target: PRODUCT.to_string(),
                    mode: FieldResolutionMode::Batch,
                    field: FieldDeclaration::default(),
                }))
                .with_parameter(ParameterDescriptor::new(
                    "products",
                    TypeRef::list(TypeRef::named(PRODUCT)),
                )),
        ),
    );

    assert!(matches!(result, Err(TemplateError::InvalidBatchReturnType { .. })));
}

#[test]
fn per_item_extension_receives_the_source() -> Result<()> {
    let template = compile(
        controller_type().with_method(
            MethodDescriptor::new("ReviewCount", TypeRef::named("i32"))
                .with_annotation(Annotation::TypeExtension(TypeExtensionDeclaration {
                    target: PRODUCT.to_string(),
                    mode: FieldResolutionMode::PerSourceItem,
                    field: FieldDeclaration::default(),
                }))
                .with_parameter(ParameterDescriptor::new("product", TypeRef::named(PRODUCT))),
        ),
    )?;

    let count = template.actions().get("ReviewCount").expect("extension field");
    assert_eq!(count.route().path(), "[type]/Product/ReviewCount");
    assert_eq!(count.type_expression().expect("parsed").to_string(), "Int!");

    Ok(())
}

#[test]
fn extensions_of_scalars_are_rejected() {
    let result = compile(
        controller_type().with_method(
            MethodDescriptor::new("Shout", TypeRef::named("String"))
                .with_annotation(Annotation::TypeExtension(TypeExtensionDeclaration {
                    target: "String".to_string(),
                    mode: FieldResolutionMode::PerSourceItem,
                    field: FieldDeclaration::default(),
                })),
        ),
    );

    assert!(matches!(result, Err(TemplateError::InvalidTypeExtensionTarget { .. })));
}

#[test]
fn controllers_must_derive_from_the_controller_base() {
    let resolver = test_utils::resolver([TypeDescriptor::new(CONTROLLER, TypeShape::Class)]);
    let descriptor = resolver.find_type(CONTROLLER).expect("described");

    let err = ControllerTemplate::new(descriptor, resolver).expect_err("not a controller");
    assert_eq!(err.kind(), TemplateErrorKind::Usage);
}
