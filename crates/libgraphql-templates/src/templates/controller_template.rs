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
use crate::templates::FieldContainer;
use crate::templates::FieldOwner;
use crate::templates::FieldSource;
use crate::templates::FieldTemplate;
use crate::templates::SchemaItemTemplate;
use crate::templates::SecurityGroup;
use crate::templates::TemplateHelpers;
use crate::templates::TypeTemplateCore;
use crate::types::DependentType;
use crate::types::TypeKind;
use inherent::inherent;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TemplateError>;

/// A container of actions: methods exposed as fields beneath the query or
/// mutation root, or as extensions of other types.
///
/// Actions are routed beneath the controller's `GraphRoute` path (by
/// default, the type name without its `Controller` suffix) unless the
/// controller or the action is marked as a root.
#[derive(Clone, Debug)]
pub struct ControllerTemplate {
    actions: FieldContainer,
    action_segments: Vec<String>,
    core: TypeTemplateCore,
}
impl ControllerTemplate {
    pub fn new(descriptor: Arc<TypeDescriptor>, resolver: SharedTypeResolver) -> Result<Self> {
        let core = TypeTemplateCore::new(descriptor, TypeKind::Controller, resolver);
        let internal_name = core.internal_name();
        if internal_name == well_known::CONTROLLER_BASE
            || !core.resolver.is_assignable(internal_name, well_known::CONTROLLER_BASE) {
            return Err(core.invalid_shape(format!(
                "controllers must derive from `{}`",
                well_known::CONTROLLER_BASE,
            )));
        }
        Ok(Self {
            actions: FieldContainer::new(),
            action_segments: vec![],
            core,
        })
    }

    /// Route segments prepended to the controller's (non-root) actions.
    pub fn action_segments(&self) -> &[String] {
        self.action_segments.as_slice()
    }

    pub fn actions(&self) -> &FieldContainer {
        &self.actions
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

    pub fn name(&self) -> &str {
        self.core.name.as_str()
    }

    pub fn route(&self) -> &SchemaItemPath {
        &self.core.route
    }

    pub fn security_group(&self) -> &SecurityGroup {
        &self.core.security
    }

    fn route_path(descriptor: &TypeDescriptor) -> String {
        let declared =
            descriptor.first_annotation(AnnotationFamily::GraphRoute)
                .and_then(|annot| match annot {
                    Annotation::GraphRoute { path } => Some(path.trim().to_string()),
                    _ => None,
                })
                .filter(|path| !path.is_empty());
        if let Some(path) = declared {
            return path;
        }

        let short_name = descriptor.short_name();
        short_name.strip_suffix(constants::CONTROLLER_NAME_SUFFIX)
            .filter(|name| !name.is_empty())
            .unwrap_or(short_name)
            .to_string()
    }
}

#[inherent]
impl SchemaItemTemplate for ControllerTemplate {
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
        let route_path = Self::route_path(self.core.descriptor.as_ref());
        self.core.parse_common(SchemaItemCollection::Types, Some(route_path.to_owned()));

        let descriptor = self.core.descriptor.as_ref();
        self.action_segments =
            if descriptor.has_annotation(AnnotationFamily::GraphRoot) {
                vec![]
            } else {
                SchemaItemPath::join(SchemaItemCollection::Query, [route_path.as_str()])
                    .segments()
                    .to_vec()
            };

        let owner =
            FieldOwner::new(descriptor.name.as_str(), TypeKind::Controller, self.core.route.to_owned())
                .with_action_segments(self.action_segments.to_owned())
                .with_security(self.core.security.to_owned());
        let mut actions = FieldContainer::new();
        for method in &descriptor.methods {
            if TemplateHelpers::is_skipped(method) {
                continue;
            }
            let source =
                if method.has_annotation(AnnotationFamily::Query)
                    || method.has_annotation(AnnotationFamily::Mutation) {
                    FieldSource::Action(method.to_owned())
                } else if method.has_annotation(AnnotationFamily::TypeExtension) {
                    FieldSource::TypeExtension(method.to_owned())
                } else {
                    continue;
                };
            actions.push(FieldTemplate::new(source, owner.to_owned(), self.core.resolver.clone()));
        }
        actions.parse_all();
        self.actions = actions;
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        TemplateHelpers::dedupe_dependent_types(
            self.actions.required_types()
                .chain(self.core.directive_required_types()),
        )
    }

    pub fn validate_or_throw(&self, validate_children: bool) -> Result<()> {
        self.core.validate_common()?;
        self.actions.validate_unique_paths(self.core.internal_name())?;
        if validate_children {
            self.actions.validate_children()?;
        }
        Ok(())
    }
}
