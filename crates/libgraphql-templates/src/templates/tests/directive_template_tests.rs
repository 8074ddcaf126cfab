use crate::TemplateError;
use crate::TemplateErrorKind;
use crate::Value;
use crate::constants::well_known;
use crate::meta::Annotation;
use crate::meta::DirectiveApplication;
use crate::meta::DirectiveReference;
use crate::meta::MethodDescriptor;
use crate::meta::ParameterDescriptor;
use crate::meta::TypeDescriptor;
use crate::meta::TypeRef;
use crate::meta::TypeShape;
use crate::templates::DirectiveLifeCycle;
use crate::templates::DirectiveTemplate;
use crate::templates::tests::test_utils;
use crate::templates::tests::test_utils::PRODUCT;
use crate::types::DependentType;
use crate::types::DirectiveLocation;
use crate::types::TypeKind;

type Result<T> = std::result::Result<T, TemplateError>;

const CACHED: &str = "cache.CachedDirective";

fn directive_type() -> TypeDescriptor {
    TypeDescriptor::new(CACHED, TypeShape::Class)
        .with_base_type(well_known::DIRECTIVE_BASE)
        .with_annotation(Annotation::DirectiveLocations {
            locations: DirectiveLocation::FIELD_DEFINITION | DirectiveLocation::OBJECT,
        })
}

fn life_cycle_method(name: &str) -> MethodDescriptor {
    MethodDescriptor::new(name, TypeRef::named(well_known::ACTION_RESULT))
}

fn ttl() -> ParameterDescriptor {
    ParameterDescriptor::new("ttl", TypeRef::named("i32"))
}

fn compile(descriptor: TypeDescriptor) -> Result<DirectiveTemplate> {
    let resolver = test_utils::resolver([descriptor]);
    let descriptor = resolver.find_type(CACHED).expect("described");
    let mut template = DirectiveTemplate::new(descriptor, resolver)?;
    template.parse();
    template.validate_or_throw(true)?;
    Ok(template)
}

#[test]
fn directive_names_drop_the_suffix() -> Result<()> {
    let template = compile(
        directive_type()
            .with_annotation(Annotation::Repeatable)
            .with_method(life_cycle_method("BeforeFieldResolution").with_parameter(ttl()))
            .with_method(life_cycle_method("AfterFieldResolutionAsync").with_parameter(ttl())),
    )?;

    assert_eq!(template.name(), "cached");
    assert_eq!(template.route().path(), "[directive]/cached");
    assert!(template.is_repeatable());
    assert!(template.locations().contains(DirectiveLocation::FIELD_DEFINITION));
    assert_eq!(template.methods().len(), 2);
    let after = template.methods()
        .get(DirectiveLifeCycle::AfterResolution)
        .expect("after-resolution method");
    assert_eq!(after.signature(), "(ttl: Int!)");

    Ok(())
}

#[test]
fn explicit_graph_type_names_are_kept() -> Result<()> {
    let template = compile(
        directive_type()
            .with_annotation(Annotation::GraphType { name: "cacheControl".to_string() })
            .with_method(life_cycle_method("BeforeFieldResolution")),
    )?;

    assert_eq!(template.name(), "cacheControl");

    Ok(())
}

#[test]
fn execution_methods_with_different_signatures_fail() {
    let result = compile(
        directive_type()
            .with_method(life_cycle_method("BeforeFieldResolution").with_parameter(ttl()))
            .with_method(
                life_cycle_method("AfterFieldResolution")
                    .with_parameter(ttl())
                    .with_parameter(ParameterDescriptor::new("scope", TypeRef::named("String"))),
            ),
    );

    let Err(err) = result else {
        panic!("expected mismatched signatures to fail");
    };
    let message = err.to_string();
    assert!(matches!(err, TemplateError::MismatchedDirectiveSignatures { .. }));
    assert!(message.contains("cache.CachedDirective.BeforeFieldResolution"));
    assert!(message.contains("cache.CachedDirective.AfterFieldResolution"));
    assert!(message.contains("(ttl: Int!)"));
    assert!(message.contains("(ttl: Int!, scope: String)"));
}

#[test]
fn execution_methods_must_declare_the_same_parameter_types() {
    let result = compile(
        directive_type()
            .with_method(
                life_cycle_method("BeforeFieldResolution")
                    .with_parameter(ParameterDescriptor::new("ttl", TypeRef::optional(TypeRef::named("i32")))),
            )
            .with_method(
                life_cycle_method("AfterFieldResolution")
                    .with_parameter(ttl().with_default(Value::Int(5))),
            ),
    );

    let Err(err) = result else {
        panic!("expected mismatched parameter types to fail");
    };
    let message = err.to_string();
    assert!(matches!(err, TemplateError::MismatchedDirectiveSignatures { .. }));
    assert!(message.contains("(ttl: Int)"));
    assert!(message.contains("(ttl: Int = 5)"));
}

#[test]
fn type_system_methods_are_excluded_from_the_signature_check() -> Result<()> {
    compile(
        directive_type()
            .with_method(life_cycle_method("BeforeFieldResolution").with_parameter(ttl()))
            .with_method(life_cycle_method("AlterTypeSystem")),
    )?;

    Ok(())
}

#[test]
fn second_registration_for_a_life_cycle_is_reported() {
    let result = compile(
        directive_type()
            .with_method(life_cycle_method("BeforeFieldResolution"))
            .with_method(life_cycle_method("BeforeFieldResolutionAsync")),
    );

    let Err(TemplateError::DuplicateLifeCycleRegistrations { duplicates, .. }) = result else {
        panic!("expected duplicate life cycle registrations");
    };
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].life_cycle, DirectiveLifeCycle::BeforeResolution);
    assert_eq!(duplicates[0].methods, vec![
        "cache.CachedDirective.BeforeFieldResolution".to_string(),
        "cache.CachedDirective.BeforeFieldResolutionAsync".to_string(),
    ]);
}

#[test]
fn directives_need_locations_and_methods() {
    let no_locations = compile(
        TypeDescriptor::new(CACHED, TypeShape::Class)
            .with_base_type(well_known::DIRECTIVE_BASE)
            .with_method(life_cycle_method("BeforeFieldResolution")),
    );
    assert!(matches!(no_locations, Err(TemplateError::MissingDirectiveLocations { .. })));

    let no_methods = compile(directive_type());
    assert!(matches!(no_methods, Err(TemplateError::MissingDirectiveLifeCycleMethods { .. })));
}

#[test]
fn life_cycle_methods_must_return_action_results() {
    let result = compile(
        directive_type()
            .with_method(MethodDescriptor::new("BeforeFieldResolution", TypeRef::named("bool"))),
    );

    assert!(matches!(result, Err(TemplateError::InvalidDirectiveMethodReturnType { .. })));
}

#[test]
fn directives_must_derive_from_the_directive_base() {
    let resolver = test_utils::resolver([TypeDescriptor::new(CACHED, TypeShape::Class)]);
    let descriptor = resolver.find_type(CACHED).expect("described");

    let err = DirectiveTemplate::new(descriptor, resolver).expect_err("not a directive");
    assert_eq!(err.kind(), TemplateErrorKind::Usage);
}

#[test]
fn applied_directives_are_validated_and_required() -> Result<()> {
    let applied_to_product =
        test_utils::product_type()
            .with_annotation(Annotation::ApplyDirective(DirectiveApplication {
                directive: DirectiveReference::Type(CACHED.to_string()),
                arguments: vec![],
            }));
    let template = test_utils::compile_object(PRODUCT, vec![
        directive_type().with_method(life_cycle_method("BeforeFieldResolution")),
        applied_to_product,
    ])?;

    assert_eq!(template.applied_directives().len(), 1);
    assert!(template.required_types().contains(
        &DependentType::new(CACHED, TypeKind::Directive),
    ));

    let misapplied =
        test_utils::product_type()
            .with_annotation(Annotation::ApplyDirective(DirectiveApplication {
                directive: DirectiveReference::Type("shop.Review".to_string()),
                arguments: vec![],
            }));
    let result = test_utils::compile_object(PRODUCT, vec![
        misapplied,
        test_utils::review_type(),
    ]);
    assert!(matches!(
        result,
        Err(TemplateError::InvalidDirectiveReference { ref directive, .. })
            if directive == "shop.Review",
    ));

    Ok(())
}
