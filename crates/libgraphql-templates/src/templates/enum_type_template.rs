use crate::DuplicateEnumValue;
use crate::TemplateError;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeDescriptor;
use crate::meta::TypeShape;
use crate::route::SchemaItemCollection;
use crate::route::SchemaItemPath;
use crate::templates::AppliedDirectiveTemplate;
use crate::templates::DuplicateCollector;
use crate::templates::EnumValueTemplate;
use crate::templates::SchemaItemTemplate;
use crate::templates::TemplateHelpers;
use crate::templates::TypeTemplateCore;
use crate::types::DependentType;
use crate::types::TypeKind;
use inherent::inherent;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TemplateError>;

/// An enum type compiled from an enumeration.
///
/// Labels marked `Skip` are left out entirely; every remaining label must
/// have a distinct underlying value.
#[derive(Clone, Debug)]
pub struct EnumTypeTemplate {
    core: TypeTemplateCore,
    values: Vec<EnumValueTemplate>,
}
impl EnumTypeTemplate {
    pub fn new(descriptor: Arc<TypeDescriptor>, resolver: SharedTypeResolver) -> Result<Self> {
        let core = TypeTemplateCore::new(descriptor, TypeKind::Enum, resolver);
        if core.descriptor.shape != TypeShape::Enum {
            return Err(core.invalid_shape("enum types must be enumerations"));
        }
        Ok(Self {
            core,
            values: vec![],
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

    /// Included labels sharing an underlying value, grouped by value in
    /// first-seen order.
    pub fn duplicate_values(&self) -> Vec<DuplicateEnumValue> {
        let mut values = DuplicateCollector::new();
        for value in &self.values {
            values.add(value.value(), value.label());
        }
        values.into_duplicates()
            .into_iter()
            .map(|(value, labels)| DuplicateEnumValue {
                value: value.to_string(),
                labels,
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        self.core.name.as_str()
    }

    pub fn route(&self) -> &SchemaItemPath {
        &self.core.route
    }

    /// Looks up a value by its schema-facing name.
    pub fn value(&self, name: &str) -> Option<&EnumValueTemplate> {
        self.values.iter().find(|value| value.name() == name)
    }

    /// The included values, in declaration order.
    pub fn values(&self) -> &[EnumValueTemplate] {
        self.values.as_slice()
    }
}

#[inherent]
impl SchemaItemTemplate for EnumTypeTemplate {
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
        self.core.parse_common(SchemaItemCollection::Enums, None);

        let descriptor = self.core.descriptor.as_ref();
        self.values =
            descriptor.enum_members.iter()
                .filter(|member| !TemplateHelpers::is_skipped(*member))
                .map(|member| {
                    let mut value = EnumValueTemplate::new(
                        member.to_owned(),
                        descriptor.name.as_str(),
                        &self.core.route,
                        descriptor.enum_repr,
                        self.core.resolver.clone(),
                    );
                    value.parse();
                    value
                })
                .collect();
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        TemplateHelpers::dedupe_dependent_types(
            self.core.directive_required_types()
                .chain(self.values.iter().flat_map(|value| value.required_types())),
        )
    }

    pub fn validate_or_throw(&self, validate_children: bool) -> Result<()> {
        self.core.validate_common()?;

        let duplicates = self.duplicate_values();
        if !duplicates.is_empty() {
            return Err(TemplateError::DuplicateEnumValues {
                internal_name: self.core.internal_name().to_string(),
                duplicates,
            });
        }

        if validate_children {
            for value in &self.values {
                value.validate_or_throw(true)?;
            }
        }
        Ok(())
    }
}
