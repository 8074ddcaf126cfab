use crate::TemplateError;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeDescriptor;
use crate::route::SchemaItemPath;
use crate::templates::AppliedDirectiveTemplate;
use crate::templates::ControllerTemplate;
use crate::templates::DirectiveTemplate;
use crate::templates::EnumTypeTemplate;
use crate::templates::FieldContainer;
use crate::templates::InputObjectTypeTemplate;
use crate::templates::InterfaceTypeTemplate;
use crate::templates::ObjectTypeTemplate;
use crate::templates::SchemaItemTemplate;
use crate::templates::TemplateOptions;
use crate::types::DependentType;
use crate::types::TypeKind;
use inherent::inherent;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TemplateError>;

/// Any template compiled directly from a backing type.
#[derive(Clone, Debug)]
pub enum GraphTypeTemplate {
    Controller(ControllerTemplate),
    Directive(DirectiveTemplate),
    Enum(EnumTypeTemplate),
    InputObject(InputObjectTypeTemplate),
    Interface(InterfaceTypeTemplate),
    Object(ObjectTypeTemplate),
}
impl GraphTypeTemplate {
    /// Constructs (but does not parse) the template of the given kind for a
    /// backing type. Scalars and unions have no backing-type template.
    pub fn new(
        descriptor: Arc<TypeDescriptor>,
        kind: TypeKind,
        resolver: SharedTypeResolver,
        options: TemplateOptions,
    ) -> Result<Self> {
        Ok(match kind {
            TypeKind::Controller =>
                Self::Controller(ControllerTemplate::new(descriptor, resolver)?),
            TypeKind::Directive =>
                Self::Directive(DirectiveTemplate::new(descriptor, resolver)?),
            TypeKind::Enum =>
                Self::Enum(EnumTypeTemplate::new(descriptor, resolver)?),
            TypeKind::InputObject =>
                Self::InputObject(InputObjectTypeTemplate::new(descriptor, resolver, options)?),
            TypeKind::Interface =>
                Self::Interface(InterfaceTypeTemplate::new(descriptor, resolver, options)?),
            TypeKind::Object =>
                Self::Object(ObjectTypeTemplate::new(descriptor, resolver, options)?),
            TypeKind::Scalar | TypeKind::Union =>
                return Err(TemplateError::InvalidTemplateShape {
                    internal_name: descriptor.name.to_owned(),
                    kind,
                    reason: format!("{kind} types are not compiled from a backing type"),
                }),
        })
    }

    pub fn applied_directives(&self) -> &[AppliedDirectiveTemplate] {
        match self {
            Self::Controller(t) => t.applied_directives(),
            Self::Directive(t) => t.applied_directives(),
            Self::Enum(t) => t.applied_directives(),
            Self::InputObject(t) => t.applied_directives(),
            Self::Interface(t) => t.applied_directives(),
            Self::Object(t) => t.applied_directives(),
        }
    }

    pub fn as_controller(&self) -> Option<&ControllerTemplate> {
        if let Self::Controller(t) = self { Some(t) } else { None }
    }

    pub fn as_directive(&self) -> Option<&DirectiveTemplate> {
        if let Self::Directive(t) = self { Some(t) } else { None }
    }

    pub fn as_enum(&self) -> Option<&EnumTypeTemplate> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Controller(t) => t.description(),
            Self::Directive(t) => t.description(),
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
        }
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        match self {
            Self::Controller(t) => t.descriptor(),
            Self::Directive(t) => t.descriptor(),
            Self::Enum(t) => t.descriptor(),
            Self::InputObject(t) => t.descriptor(),
            Self::Interface(t) => t.descriptor(),
            Self::Object(t) => t.descriptor(),
        }
    }

    /// The field templates of non-leaf kinds. For controllers these are the
    /// actions.
    pub fn fields(&self) -> Option<&FieldContainer> {
        match self {
            Self::Controller(t) => Some(t.actions()),
            Self::InputObject(t) => Some(t.fields()),
            Self::Interface(t) => Some(t.fields()),
            Self::Object(t) => Some(t.fields()),
            Self::Directive(_) | Self::Enum(_) => None,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Controller(_) => TypeKind::Controller,
            Self::Directive(_) => TypeKind::Directive,
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::Interface(_) => TypeKind::Interface,
            Self::Object(_) => TypeKind::Object,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Controller(t) => t.name(),
            Self::Directive(t) => t.name(),
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
        }
    }

    /// The internal name of the backing type.
    pub fn object_type(&self) -> &str {
        self.descriptor().name.as_str()
    }

    pub fn route(&self) -> &SchemaItemPath {
        match self {
            Self::Controller(t) => t.route(),
            Self::Directive(t) => t.route(),
            Self::Enum(t) => t.route(),
            Self::InputObject(t) => t.route(),
            Self::Interface(t) => t.route(),
            Self::Object(t) => t.route(),
        }
    }
}

#[inherent]
impl SchemaItemTemplate for GraphTypeTemplate {
    pub fn internal_name(&self) -> &str {
        match self {
            Self::Controller(t) => t.internal_name(),
            Self::Directive(t) => t.internal_name(),
            Self::Enum(t) => t.internal_name(),
            Self::InputObject(t) => t.internal_name(),
            Self::Interface(t) => t.internal_name(),
            Self::Object(t) => t.internal_name(),
        }
    }

    pub fn is_parsed(&self) -> bool {
        match self {
            Self::Controller(t) => t.is_parsed(),
            Self::Directive(t) => t.is_parsed(),
            Self::Enum(t) => t.is_parsed(),
            Self::InputObject(t) => t.is_parsed(),
            Self::Interface(t) => t.is_parsed(),
            Self::Object(t) => t.is_parsed(),
        }
    }

    pub fn parse(&mut self) {
        match self {
            Self::Controller(t) => t.parse(),
            Self::Directive(t) => t.parse(),
            Self::Enum(t) => t.parse(),
            Self::InputObject(t) => t.parse(),
            Self::Interface(t) => t.parse(),
            Self::Object(t) => t.parse(),
        }
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        match self {
            Self::Controller(t) => t.required_types(),
            Self::Directive(t) => t.required_types(),
            Self::Enum(t) => t.required_types(),
            Self::InputObject(t) => t.required_types(),
            Self::Interface(t) => t.required_types(),
            Self::Object(t) => t.required_types(),
        }
    }

    pub fn validate_or_throw(&self, validate_children: bool) -> Result<()> {
        match self {
            Self::Controller(t) => t.validate_or_throw(validate_children),
            Self::Directive(t) => t.validate_or_throw(validate_children),
            Self::Enum(t) => t.validate_or_throw(validate_children),
            Self::InputObject(t) => t.validate_or_throw(validate_children),
            Self::Interface(t) => t.validate_or_throw(validate_children),
            Self::Object(t) => t.validate_or_throw(validate_children),
        }
    }
}
