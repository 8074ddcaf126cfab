use crate::TemplateError;
use crate::constants;
use crate::constants::well_known;
use crate::meta::Annotation;
use crate::meta::AnnotationFamily;
use crate::meta::AnnotationProvider;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeDescriptor;
use crate::route::SchemaItemCollection;
use crate::route::SchemaItemPath;
use crate::templates::AppliedDirectiveTemplate;
use crate::templates::DirectiveLifeCycle;
use crate::templates::DirectiveMethodContainer;
use crate::templates::DirectiveMethodTemplate;
use crate::templates::SchemaItemTemplate;
use crate::templates::TemplateHelpers;
use crate::templates::TypeTemplateCore;
use crate::types::DependentType;
use crate::types::DirectiveLocation;
use crate::types::TypeKind;
use inherent::inherent;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TemplateError>;

/// A directive compiled from a type deriving from the directive base type.
///
/// Unless renamed with `GraphType`, the directive is named after its type
/// with any `Directive` suffix removed and the first letter lowercased
/// (`CachedDirective` becomes `@cached`).
#[derive(Clone, Debug)]
pub struct DirectiveTemplate {
    core: TypeTemplateCore,
    is_repeatable: bool,
    locations: DirectiveLocation,
    methods: DirectiveMethodContainer,
}
impl DirectiveTemplate {
    pub fn new(descriptor: Arc<TypeDescriptor>, resolver: SharedTypeResolver) -> Result<Self> {
        let core = TypeTemplateCore::new(descriptor, TypeKind::Directive, resolver);
        let internal_name = core.internal_name().to_string();
        if internal_name == well_known::DIRECTIVE_BASE
            || !core.resolver.is_assignable(internal_name.as_str(), well_known::DIRECTIVE_BASE) {
            return Err(core.invalid_shape(format!(
                "directives must derive from `{}`",
                well_known::DIRECTIVE_BASE,
            )));
        }
        Ok(Self {
            core,
            is_repeatable: false,
            locations: DirectiveLocation::empty(),
            methods: DirectiveMethodContainer::new(internal_name),
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

    pub fn is_repeatable(&self) -> bool {
        self.is_repeatable
    }

    pub fn locations(&self) -> DirectiveLocation {
        self.locations
    }

    pub fn methods(&self) -> &DirectiveMethodContainer {
        &self.methods
    }

    pub fn name(&self) -> &str {
        self.core.name.as_str()
    }

    pub fn route(&self) -> &SchemaItemPath {
        &self.core.route
    }

    fn derive_name(descriptor: &TypeDescriptor) -> String {
        let explicit =
            descriptor.annotations(AnnotationFamily::GraphType, false)
                .into_iter()
                .find_map(|annot| match annot {
                    Annotation::GraphType { name } => Some(name.trim().to_string()),
                    _ => None,
                })
                .filter(|name| !name.is_empty());
        if let Some(name) = explicit {
            return name;
        }

        let short_name = descriptor.short_name();
        let base_name =
            short_name.strip_suffix(constants::DIRECTIVE_NAME_SUFFIX)
                .filter(|name| !name.is_empty())
                .unwrap_or(short_name);
        let mut chars = base_name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[inherent]
impl SchemaItemTemplate for DirectiveTemplate {
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
        let name = Self::derive_name(self.core.descriptor.as_ref());
        self.core.parse_common(SchemaItemCollection::Directives, Some(name));

        let descriptor = self.core.descriptor.as_ref();
        self.locations =
            descriptor.annotations(AnnotationFamily::DirectiveLocations, true)
                .into_iter()
                .fold(DirectiveLocation::empty(), |locations, annot| match annot {
                    Annotation::DirectiveLocations { locations: declared } => locations | *declared,
                    _ => locations,
                });
        self.is_repeatable = descriptor.has_annotation(AnnotationFamily::Repeatable);

        for method in &descriptor.methods {
            let Some(life_cycle) = DirectiveLifeCycle::from_method_name(method.name.as_str()) else {
                continue;
            };
            let mut template = DirectiveMethodTemplate::new(
                method.to_owned(),
                life_cycle,
                descriptor.name.as_str(),
                &self.core.route,
                self.core.resolver.clone(),
            );
            template.parse();
            self.methods.register(template);
        }
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        TemplateHelpers::dedupe_dependent_types(
            self.methods.required_types()
                .chain(self.core.directive_required_types()),
        )
    }

    pub fn validate_or_throw(&self, validate_children: bool) -> Result<()> {
        self.core.validate_common()?;

        if self.locations.is_empty() {
            return Err(TemplateError::MissingDirectiveLocations {
                internal_name: self.core.internal_name().to_string(),
            });
        }
        if self.methods.is_empty() {
            return Err(TemplateError::MissingDirectiveLifeCycleMethods {
                internal_name: self.core.internal_name().to_string(),
            });
        }
        self.methods.validate_or_throw()?;

        if validate_children {
            for method in self.methods.iter() {
                method.validate_or_throw(true)?;
            }
        }
        Ok(())
    }
}
