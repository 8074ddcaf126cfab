use crate::TemplateError;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeDescriptor;
use crate::route::SchemaItemCollection;
use crate::route::SchemaItemPath;
use crate::templates::AppliedDirectiveTemplate;
use crate::templates::FieldContainer;
use crate::templates::FieldOwner;
use crate::templates::SchemaItemTemplate;
use crate::templates::SecurityGroup;
use crate::templates::TemplateHelpers;
use crate::templates::TemplateOptions;
use crate::templates::TypeTemplateCore;
use crate::types::DependentType;
use crate::types::TypeKind;
use inherent::inherent;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TemplateError>;

/// An output object type compiled from a class or struct.
#[derive(Clone, Debug)]
pub struct ObjectTypeTemplate {
    core: TypeTemplateCore,
    declared_interfaces: Vec<String>,
    fields: FieldContainer,
    options: TemplateOptions,
}
impl ObjectTypeTemplate {
    pub fn new(
        descriptor: Arc<TypeDescriptor>,
        resolver: SharedTypeResolver,
        options: TemplateOptions,
    ) -> Result<Self> {
        let core = TypeTemplateCore::new(descriptor, TypeKind::Object, resolver);
        if !core.descriptor.shape.is_object_like() {
            return Err(core.invalid_shape("object types must be classes or structs"));
        }
        if core.resolver.is_scalar(core.internal_name()) {
            return Err(core.invalid_shape("the type is registered as a scalar"));
        }

        Ok(Self {
            core,
            declared_interfaces: vec![],
            fields: FieldContainer::new(),
            options,
        })
    }

    pub fn applied_directives(&self) -> &[AppliedDirectiveTemplate] {
        self.core.applied_directives.as_slice()
    }

    /// Internal names of the described interfaces this type implements.
    pub fn declared_interfaces(&self) -> &[String] {
        self.declared_interfaces.as_slice()
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

    pub fn security_group(&self) -> &SecurityGroup {
        &self.core.security
    }
}

#[inherent]
impl SchemaItemTemplate for ObjectTypeTemplate {
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

        let owner =
            FieldOwner::new(self.core.internal_name(), TypeKind::Object, self.core.route.to_owned())
                .with_security(self.core.security.to_owned());
        self.fields = TemplateHelpers::output_fields(
            self.core.descriptor.as_ref(),
            &owner,
            &self.core.resolver,
            &self.options,
        );
        self.fields.parse_all();
        self.declared_interfaces =
            TemplateHelpers::declared_interfaces(self.core.descriptor.as_ref(), self.core.resolver.as_ref());
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        TemplateHelpers::dedupe_dependent_types(
            self.declared_interfaces.iter()
                .map(|iface| DependentType::new(iface.as_str(), TypeKind::Interface))
                .chain(self.fields.required_types())
                .chain(self.core.directive_required_types()),
        )
    }

    pub fn validate_or_throw(&self, validate_children: bool) -> Result<()> {
        self.core.validate_common()?;
        self.fields.validate_unique_paths(self.core.internal_name())?;
        if validate_children {
            self.fields.validate_children()?;
        }
        Ok(())
    }
}
