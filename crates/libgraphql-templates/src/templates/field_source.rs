use crate::meta::Annotation;
use crate::meta::AnnotationFamily;
use crate::meta::AnnotationProvider;
use crate::meta::FieldDeclaration;
use crate::meta::MethodDescriptor;
use crate::meta::ParameterDescriptor;
use crate::meta::PropertyDescriptor;
use crate::meta::TypeExtensionDeclaration;
use crate::meta::TypeRef;
use crate::templates::FieldResolutionMode;

/// The member a field is compiled from.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldSource {
    /// A controller method exposed beneath the query or mutation root.
    Action(MethodDescriptor),

    /// A method of an object, interface or input type.
    Method(MethodDescriptor),

    /// A property of an object, interface or input type.
    Property(PropertyDescriptor),

    /// A method that adds a field to another type.
    TypeExtension(MethodDescriptor),
}
impl FieldSource {
    pub fn annotations(&self) -> &dyn AnnotationProvider {
        match self {
            Self::Action(method)
                | Self::Method(method)
                | Self::TypeExtension(method)
                => method,
            Self::Property(property) => property,
        }
    }

    /// The first field-declaring annotation on the member, if any.
    pub fn declaration(&self) -> Option<&FieldDeclaration> {
        let provider = self.annotations();
        provider.declared_annotations()
            .iter()
            .chain(provider.inherited_annotations().iter())
            .find_map(Annotation::field_declaration)
    }

    /// The member's type: a property's type or a method's return type.
    pub fn declared_type(&self) -> &TypeRef {
        match self {
            Self::Action(method)
                | Self::Method(method)
                | Self::TypeExtension(method)
                => &method.return_type,
            Self::Property(property) => &property.type_ref,
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Action(_))
            && self.annotations().has_annotation(AnnotationFamily::Mutation)
    }

    pub fn member_name(&self) -> &str {
        match self {
            Self::Action(method)
                | Self::Method(method)
                | Self::TypeExtension(method)
                => method.name.as_str(),
            Self::Property(property) => property.name.as_str(),
        }
    }

    pub fn method(&self) -> Option<&MethodDescriptor> {
        match self {
            Self::Action(method)
                | Self::Method(method)
                | Self::TypeExtension(method)
                => Some(method),
            Self::Property(_) => None,
        }
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        self.method()
            .map(|method| method.parameters.as_slice())
            .unwrap_or_default()
    }

    /// The resolution mode requested by a `TypeExtension` annotation on the
    /// member, whatever kind of member it is.
    pub fn resolution_mode(&self) -> FieldResolutionMode {
        self.extension_annotation()
            .map(|extension| extension.mode)
            .unwrap_or_default()
    }

    pub fn type_extension(&self) -> Option<&TypeExtensionDeclaration> {
        if !matches!(self, Self::TypeExtension(_)) {
            return None;
        }
        self.extension_annotation()
    }

    fn extension_annotation(&self) -> Option<&TypeExtensionDeclaration> {
        self.annotations()
            .first_annotation(AnnotationFamily::TypeExtension)
            .and_then(|annot| match annot {
                Annotation::TypeExtension(extension) => Some(extension),
                _ => None,
            })
    }
}
