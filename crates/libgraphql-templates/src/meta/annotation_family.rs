/// Identifies a kind of [`Annotation`](crate::meta::Annotation) without its
/// payload, for lookups such as
/// [`AnnotationProvider::has_annotation`](crate::meta::AnnotationProvider::has_annotation).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AnnotationFamily {
    AllowAnonymous,
    ApplyDirective,
    Authorize,
    Deprecated,
    Description,
    DirectiveLocations,
    EnumValue,
    FromGraphQL,
    FromServices,
    GraphField,
    GraphRoot,
    GraphRoute,
    GraphType,
    Mutation,
    PossibleTypes,
    Query,
    Repeatable,
    Skip,
    TypeExtension,
}
