use crate::TemplateError;
use crate::meta::AnnotationFamily;
use crate::meta::AnnotationProvider;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeDescriptor;
use crate::route::SchemaItemCollection;
use crate::route::SchemaItemPath;
use crate::templates::AppliedDirectiveTemplate;
use crate::templates::FieldContainer;
use crate::templates::FieldOwner;
use crate::templates::FieldSource;
use crate::templates::FieldTemplate;
use crate::templates::SchemaItemTemplate;
use crate::templates::TemplateHelpers;
use crate::templates::TemplateOptions;
use crate::templates::TypeTemplateCore;
use crate::types::DependentType;
use crate::types::TypeKind;
use inherent::inherent;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TemplateError>;

/// An input object type. Its fields are the readable and writable properties
/// of the backing type.
#[derive(Clone, Debug)]
pub struct InputObjectTypeTemplate {
    core: TypeTemplateCore,
    fields: FieldContainer,
    options: TemplateOptions,
}
impl InputObjectTypeTemplate {
    pub fn new(
        descriptor: Arc<TypeDescriptor>,
        resolver: SharedTypeResolver,
        options: TemplateOptions,
    ) -> Result<Self> {
        let core = TypeTemplateCore::new(descriptor, TypeKind::InputObject, resolver);
        if !core.descriptor.shape.is_object_like() {
            return Err(core.invalid_shape("input objects must be classes or structs"));
        }
        if core.resolver.is_scalar(core.internal_name()) {
            return Err(core.invalid_shape("the type is registered as a scalar"));
        }

        Ok(Self {
            core,
            fields: FieldContainer::new(),
            options,
        })
    }

    pub fn applied_directives(&self) -> &[AppliedDirectiveTemplate] {
        self.core.applied_directives.as_slice()
    }

    pub fn description(&self) -> Option<&str> {
        self.core.description.as_deref()
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        self.core.descriptor.as_ref()
    }

    pub fn fields(&self) -> &FieldContainer {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.core.name.as_str()
    }

    pub fn route(&self) -> &SchemaItemPath {
        &self.core.route
    }
}

#[inherent]
impl SchemaItemTemplate for InputObjectTypeTemplate {
    pub fn internal_name(&self) -> &str {
        self.core.internal_name()
    }

    pub fn is_parsed(&self) -> bool {
        self.core.parsed
    }

    pub fn parse(&mut self) {
        if self.core.parsed {
            return;
        }
        self.core.parse_common(SchemaItemCollection::Types, None);

        let owner = FieldOwner::new(
            self.core.internal_name(),
            TypeKind::InputObject,
            self.core.route.to_owned(),
        );
        let mut fields = FieldContainer::new();
        for property in &self.core.descriptor.properties {
            let is_included =
                property.has_getter
                    && property.has_setter
                    && !TemplateHelpers::is_skipped(property)
                    && (!self.options.require_property_declarations
                        || property.has_annotation(AnnotationFamily::GraphField));
            if is_included {
                fields.push(FieldTemplate::new(
                    FieldSource::Property(property.to_owned()),
                    owner.to_owned(),
                    self.core.resolver.clone(),
                ));
            }
        }
        fields.parse_all();
        self.fields = fields;
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        TemplateHelpers::dedupe_dependent_types(
            self.fields.required_types()
                .chain(self.core.directive_required_types()),
        )
    }

    pub fn validate_or_throw(&self, validate_children: bool) -> Result<()> {
        self.core.validate_common()?;
        if !self.core.descriptor.has_default_constructor {
            return Err(TemplateError::MissingDefaultConstructor {
                internal_name: self.core.internal_name().to_string(),
            });
        }
        self.fields.validate_unique_paths(self.core.internal_name())?;
        if validate_children {
            self.fields.validate_children()?;
        }
        Ok(())
    }
}
