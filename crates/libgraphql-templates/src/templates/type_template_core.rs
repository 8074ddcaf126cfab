use crate::TemplateError;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeDescriptor;
use crate::route::SchemaItemCollection;
use crate::route::SchemaItemPath;
use crate::templates::AppliedDirectiveTemplate;
use crate::templates::SecurityGroup;
use crate::templates::TemplateHelpers;
use crate::types::DependentType;
use crate::types::TypeKind;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TemplateError>;

/// State and checks shared by every graph-type template.
#[derive(Clone, Debug)]
pub(crate) struct TypeTemplateCore {
    pub(crate) applied_directives: Vec<AppliedDirectiveTemplate>,
    pub(crate) description: Option<String>,
    pub(crate) descriptor: Arc<TypeDescriptor>,
    pub(crate) is_skipped: bool,
    pub(crate) kind: TypeKind,
    pub(crate) name: String,
    pub(crate) parsed: bool,
    pub(crate) resolver: SharedTypeResolver,
    pub(crate) route: SchemaItemPath,
    pub(crate) security: SecurityGroup,
}
impl TypeTemplateCore {
    pub fn new(
        descriptor: Arc<TypeDescriptor>,
        kind: TypeKind,
        resolver: SharedTypeResolver,
    ) -> Self {
        Self {
            applied_directives: vec![],
            description: None,
            name: descriptor.short_name().to_string(),
            descriptor,
            is_skipped: false,
            kind,
            parsed: false,
            resolver,
            route: SchemaItemPath::default(),
            security: SecurityGroup::default(),
        }
    }

    pub fn directive_required_types(&self) -> impl Iterator<Item = DependentType> + '_ {
        TemplateHelpers::directive_required_types(&self.applied_directives)
    }

    pub fn internal_name(&self) -> &str {
        self.descriptor.name.as_str()
    }

    /// Reads the annotations every graph type interprets the same way and
    /// places the type in `collection` under `name` (or, if not given, its
    /// resolver-assigned graph name).
    pub fn parse_common(&mut self, collection: SchemaItemCollection, name: Option<String>) {
        log::trace!("Parsing {} template `{}`", self.kind, self.descriptor.name);
        let descriptor = self.descriptor.as_ref();
        self.name = name.unwrap_or_else(|| {
            self.resolver.graph_type_name(descriptor.name.as_str(), self.kind)
        });
        self.route = SchemaItemPath::join(collection, [self.name.as_str()]);
        self.description = TemplateHelpers::description(descriptor);
        self.security = TemplateHelpers::security_group(descriptor);
        self.is_skipped = TemplateHelpers::is_skipped(descriptor);
        self.applied_directives = TemplateHelpers::applied_directives(
            descriptor,
            descriptor.name.as_str(),
            &self.resolver,
        );
        self.parsed = true;
    }

    /// Parse completion, exclusion, route validity and applied directives.
    pub fn validate_common(&self) -> Result<()> {
        if !self.parsed {
            return Err(TemplateError::NotParsed {
                internal_name: self.internal_name().to_string(),
            });
        }
        log::trace!("Validating {} template `{}`", self.kind, self.descriptor.name);

        if self.is_skipped {
            return Err(TemplateError::ExcludedItem {
                internal_name: self.internal_name().to_string(),
            });
        }

        if !self.route.is_valid() {
            return Err(TemplateHelpers::invalid_route(self.internal_name(), &self.route));
        }

        for directive in &self.applied_directives {
            directive.validate_or_throw(true)?;
        }

        Ok(())
    }

    pub fn invalid_shape(&self, reason: impl Into<String>) -> TemplateError {
        TemplateError::InvalidTemplateShape {
            internal_name: self.internal_name().to_string(),
            kind: self.kind,
            reason: reason.into(),
        }
    }
}
