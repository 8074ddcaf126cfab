use crate::TemplateError;
use crate::constants::well_known;
use crate::meta::Annotation;
use crate::meta::FieldDeclaration;
use crate::meta::MethodDescriptor;
use crate::meta::PropertyDescriptor;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeCatalog;
use crate::meta::TypeDescriptor;
use crate::meta::TypeRef;
use crate::meta::TypeShape;
use crate::templates::ObjectTypeTemplate;
use crate::templates::TemplateOptions;
use std::sync::Arc;

pub(super) const PRODUCT: &str = "shop.Product";
pub(super) const REVIEW: &str = "shop.Review";

pub(super) fn resolver(
    types: impl IntoIterator<Item = TypeDescriptor>,
) -> SharedTypeResolver {
    Arc::new(TypeCatalog::with_types(types).expect("catalog builds"))
}

pub(super) fn product_type() -> TypeDescriptor {
    TypeDescriptor::new(PRODUCT, TypeShape::Class)
        .with_property(PropertyDescriptor::new("name", TypeRef::named("String")))
        .with_property(PropertyDescriptor::new("price", TypeRef::named("f64")))
}

pub(super) fn review_type() -> TypeDescriptor {
    TypeDescriptor::new(REVIEW, TypeShape::Class)
        .with_property(PropertyDescriptor::new("stars", TypeRef::named("i32")))
}

pub(super) fn graph_field(declaration: FieldDeclaration) -> Annotation {
    Annotation::GraphField(declaration)
}

pub(super) fn action_result_method(name: &str) -> MethodDescriptor {
    MethodDescriptor::new(name, TypeRef::named(well_known::ACTION_RESULT))
}

/// Builds, parses and validates the object type `type_name` out of `types`.
pub(super) fn compile_object(
    type_name: &str,
    types: Vec<TypeDescriptor>,
) -> std::result::Result<ObjectTypeTemplate, TemplateError> {
    let resolver = resolver(types);
    let descriptor = resolver.find_type(type_name).expect("type is described");
    let mut template =
        ObjectTypeTemplate::new(descriptor, resolver, TemplateOptions::default())?;
    template.parse();
    template.validate_or_throw(true)?;
    Ok(template)
}
