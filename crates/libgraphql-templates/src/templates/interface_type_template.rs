use crate::TemplateError;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeDescriptor;
use crate::meta::TypeShape;
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

/// An interface type compiled from an interface-shaped type.
#[derive(Clone, Debug)]
pub struct InterfaceTypeTemplate {
    core: TypeTemplateCore,
    declared_interfaces: Vec<String>,
    fields: FieldContainer,
    options: TemplateOptions,
}
impl InterfaceTypeTemplate {
    pub fn new(
        descriptor: Arc<TypeDescriptor>,
        resolver: SharedTypeResolver,
        options: TemplateOptions,
    ) -> Result<Self> {
        let core = TypeTemplateCore::new(descriptor, TypeKind::Interface, resolver);
        if core.descriptor.shape != TypeShape::Interface {
            return Err(core.invalid_shape("interface types must be interfaces"));
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

    /// Internal names of the described interfaces this interface extends.
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
impl SchemaItemTemplate for InterfaceTypeTemplate {
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
            FieldOwner::new(self.core.internal_name(), TypeKind::Interface, self.core.route.to_owned())
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
