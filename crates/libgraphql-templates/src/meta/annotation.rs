use crate::meta::AnnotationFamily;
use crate::meta::DirectiveApplication;
use crate::meta::FieldDeclaration;
use crate::meta::TypeExtensionDeclaration;
use crate::types::DirectiveLocation;

/// A declarative marker attached to a type, member, parameter or enum label.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    /// Clears any inherited security requirement.
    AllowAnonymous,

    ApplyDirective(DirectiveApplication),

    /// Declares a security requirement. Requirements are only collected;
    /// they are never evaluated by the compiler.
    Authorize {
        #[serde(default)]
        policy: Option<String>,
        #[serde(default)]
        roles: Vec<String>,
    },

    Deprecated {
        #[serde(default)]
        reason: Option<String>,
    },

    Description {
        text: String,
    },

    DirectiveLocations {
        locations: DirectiveLocation,
    },

    /// Renames an enum label on the graph.
    EnumValue {
        name: String,
    },

    /// Marks a parameter as a graph argument, optionally renaming it or
    /// overriding its type expression.
    #[serde(rename = "from_graphql")]
    FromGraphQL {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        type_expression: Option<String>,
    },

    /// The parameter is supplied by the host rather than by a caller.
    FromServices,

    GraphField(FieldDeclaration),

    /// Attaches a controller's actions directly to the operation root,
    /// dropping the controller's own route segments.
    GraphRoot,

    GraphRoute {
        path: String,
    },

    /// Overrides the graph name of a type.
    GraphType {
        name: String,
    },

    Mutation(FieldDeclaration),

    PossibleTypes {
        types: Vec<String>,
    },

    Query(FieldDeclaration),

    Repeatable,

    Skip,

    TypeExtension(TypeExtensionDeclaration),
}
impl Annotation {
    pub fn family(&self) -> AnnotationFamily {
        match self {
            Self::AllowAnonymous => AnnotationFamily::AllowAnonymous,
            Self::ApplyDirective(_) => AnnotationFamily::ApplyDirective,
            Self::Authorize { .. } => AnnotationFamily::Authorize,
            Self::Deprecated { .. } => AnnotationFamily::Deprecated,
            Self::Description { .. } => AnnotationFamily::Description,
            Self::DirectiveLocations { .. } => AnnotationFamily::DirectiveLocations,
            Self::EnumValue { .. } => AnnotationFamily::EnumValue,
            Self::FromGraphQL { .. } => AnnotationFamily::FromGraphQL,
            Self::FromServices => AnnotationFamily::FromServices,
            Self::GraphField(_) => AnnotationFamily::GraphField,
            Self::GraphRoot => AnnotationFamily::GraphRoot,
            Self::GraphRoute { .. } => AnnotationFamily::GraphRoute,
            Self::GraphType { .. } => AnnotationFamily::GraphType,
            Self::Mutation(_) => AnnotationFamily::Mutation,
            Self::PossibleTypes { .. } => AnnotationFamily::PossibleTypes,
            Self::Query(_) => AnnotationFamily::Query,
            Self::Repeatable => AnnotationFamily::Repeatable,
            Self::Skip => AnnotationFamily::Skip,
            Self::TypeExtension(_) => AnnotationFamily::TypeExtension,
        }
    }

    /// The field declaration carried by a field-declaring annotation.
    pub fn field_declaration(&self) -> Option<&FieldDeclaration> {
        match self {
            Self::GraphField(declaration)
                | Self::Mutation(declaration)
                | Self::Query(declaration)
                => Some(declaration),
            Self::TypeExtension(extension) => Some(&extension.field),
            _ => None,
        }
    }
}
