use crate::TemplateError;
use crate::Value;
use crate::constants::well_known;
use crate::meta::DirectiveApplication;
use crate::meta::DirectiveReference;
use crate::meta::SharedTypeResolver;
use crate::route;
use crate::templates::SchemaItemTemplate;
use crate::types::DependentType;
use crate::types::TypeKind;
use inherent::inherent;

type Result<T> = std::result::Result<T, TemplateError>;

/// One invocation of a directive on a schema item, as declared by an
/// `ApplyDirective` annotation.
#[derive(Clone, Debug)]
pub struct AppliedDirectiveTemplate {
    arguments: Vec<Value>,
    directive: DirectiveReference,
    internal_name: String,
    owner_name: String,
    parsed: bool,
    resolver: SharedTypeResolver,
}
impl AppliedDirectiveTemplate {
    pub fn new(
        owner_name: &str,
        application: &DirectiveApplication,
        resolver: SharedTypeResolver,
    ) -> Self {
        Self {
            arguments: application.arguments.to_owned(),
            directive: application.directive.to_owned(),
            internal_name: format!("{owner_name} {}", application.directive),
            owner_name: owner_name.to_string(),
            parsed: false,
            resolver,
        }
    }

    /// Positional argument values supplied to the directive.
    pub fn arguments(&self) -> &[Value] {
        self.arguments.as_slice()
    }

    pub fn directive(&self) -> &DirectiveReference {
        &self.directive
    }

    /// Internal name of the schema item the directive is applied to.
    pub fn owner_name(&self) -> &str {
        self.owner_name.as_str()
    }
}

#[inherent]
impl SchemaItemTemplate for AppliedDirectiveTemplate {
    pub fn internal_name(&self) -> &str {
        self.internal_name.as_str()
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    pub fn parse(&mut self) {
        if self.parsed {
            return;
        }
        self.directive = match &self.directive {
            DirectiveReference::Name(name) => DirectiveReference::Name(name.trim().to_string()),
            DirectiveReference::Type(type_name) => DirectiveReference::Type(type_name.trim().to_string()),
        };
        self.parsed = true;
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        match &self.directive {
            DirectiveReference::Type(type_name) =>
                vec![DependentType::new(type_name.as_str(), TypeKind::Directive)],
            DirectiveReference::Name(_) => vec![],
        }
    }

    pub fn validate_or_throw(&self, _validate_children: bool) -> Result<()> {
        if !self.parsed {
            return Err(TemplateError::NotParsed {
                internal_name: self.internal_name.to_owned(),
            });
        }

        match &self.directive {
            DirectiveReference::Type(type_name) => {
                if self.resolver.find_type(type_name).is_none() {
                    return Err(TemplateError::InvalidDirectiveReference {
                        internal_name: self.owner_name.to_owned(),
                        directive: type_name.to_owned(),
                        reason: "is not a described type".to_string(),
                    });
                }
                if type_name == well_known::DIRECTIVE_BASE
                    || !self.resolver.is_assignable(type_name, well_known::DIRECTIVE_BASE) {
                    return Err(TemplateError::InvalidDirectiveReference {
                        internal_name: self.owner_name.to_owned(),
                        directive: type_name.to_owned(),
                        reason: format!(
                            "does not derive from `{}`",
                            well_known::DIRECTIVE_BASE,
                        ),
                    });
                }
            },

            DirectiveReference::Name(name) => {
                if !route::is_valid_graph_name(name) {
                    return Err(TemplateError::InvalidDirectiveReference {
                        internal_name: self.owner_name.to_owned(),
                        directive: name.to_owned(),
                        reason: "is not a valid directive name".to_string(),
                    });
                }
            },
        }

        Ok(())
    }
}
